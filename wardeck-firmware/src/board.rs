//! Board wiring
//!
//! Pin assignments for the reference board (Raspberry Pi Pico):
//!
//! | Signal           | GPIO |
//! |------------------|------|
//! | I2C0 SDA         | 4    |
//! | I2C0 SCL         | 5    |
//! | Button Up        | 10   |
//! | Button Down      | 11   |
//! | Button Select    | 12   |
//! | Joystick switch  | 12   |
//! | Joystick Y (ADC0)| 26   |
//! | LED success      | 14   |
//! | LED error        | 15   |
//!
//! The display and input kinds come from `console.toml`, so both are
//! wrapped in enums that forward to whichever backend was brought up.

use defmt::*;
use embassy_rp::adc::{self, Adc};
use embassy_rp::gpio::{Input, Level, Output};
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::Delay;

use wardeck_core::config::{DisplayConfig, DisplayKind};
use wardeck_core::input::{AxisReader, Button, GpioButtons, InputSampler, JoystickInput};
use wardeck_display::{DisplayError, Headless, Lcd1602, Ssd1306, TextDisplay};

pub type DisplayBus = I2c<'static, I2C0, Blocking>;

/// Whichever display answered at boot
pub enum AnyDisplay {
    Oled(Ssd1306<DisplayBus>),
    Lcd(Lcd1602<DisplayBus, Delay>),
    Headless(Headless),
}

impl AnyDisplay {
    /// Initialize the configured display on `bus`
    ///
    /// Returns the display and whether the hardware came up. On failure the
    /// bus is dropped and screens go to the log.
    pub fn bring_up(bus: DisplayBus, config: &DisplayConfig) -> (Self, bool) {
        let address = config.address();
        let result = match config.kind {
            DisplayKind::Ssd1306 => {
                let mut oled = Ssd1306::with_address(bus, address);
                oled.init().map(|()| AnyDisplay::Oled(oled))
            }
            DisplayKind::Lcd1602 => {
                let mut lcd = Lcd1602::with_address(bus, Delay, address);
                lcd.init().map(|()| AnyDisplay::Lcd(lcd))
            }
            DisplayKind::Headless => {
                info!("Display disabled by configuration");
                return (AnyDisplay::Headless(Headless::new()), true);
            }
        };

        match result {
            Ok(display) => {
                info!("Display {:?} ready at {=u8:#x}", config.kind, address);
                (display, true)
            }
            Err(e) => {
                warn!("Display {:?} at {=u8:#x} failed: {:?}", config.kind, address, e);
                (AnyDisplay::Headless(Headless::new()), false)
            }
        }
    }
}

impl TextDisplay for AnyDisplay {
    fn print_two_lines(&mut self, top: &str, bottom: &str) -> Result<(), DisplayError> {
        match self {
            AnyDisplay::Oled(d) => d.print_two_lines(top, bottom),
            AnyDisplay::Lcd(d) => d.print_two_lines(top, bottom),
            AnyDisplay::Headless(d) => d.print_two_lines(top, bottom),
        }
    }

    fn columns(&self) -> usize {
        match self {
            AnyDisplay::Oled(d) => d.columns(),
            AnyDisplay::Lcd(d) => d.columns(),
            AnyDisplay::Headless(d) => d.columns(),
        }
    }
}

/// Joystick Y axis on an ADC pin
pub struct AdcAxis {
    adc: Adc<'static, adc::Blocking>,
    channel: adc::Channel<'static>,
}

impl AdcAxis {
    pub fn new(adc: Adc<'static, adc::Blocking>, channel: adc::Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AxisReader for AdcAxis {
    fn read_y(&mut self) -> Option<u16> {
        self.adc.blocking_read(&mut self.channel).ok()
    }
}

/// Buttons or joystick, per configuration
pub enum AnyInput {
    Buttons(GpioButtons<Input<'static>, Input<'static>, Input<'static>>),
    Joystick(JoystickInput<AdcAxis, Input<'static>>),
}

impl InputSampler for AnyInput {
    fn pressed(&mut self, button: Button) -> bool {
        match self {
            AnyInput::Buttons(b) => b.pressed(button),
            AnyInput::Joystick(j) => j.pressed(button),
        }
    }
}

/// Success and error LEDs
pub struct StatusLeds {
    success: Output<'static>,
    error: Output<'static>,
}

impl StatusLeds {
    pub fn new(success: Output<'static>, error: Output<'static>) -> Self {
        Self { success, error }
    }

    pub fn set(&mut self, success: bool, error: bool) {
        self.success.set_level(Level::from(success));
        self.error.set_level(Level::from(error));
    }
}
