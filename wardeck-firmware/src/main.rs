//! Wardeck - operator console firmware
//!
//! Main firmware binary for RP2040-based Wardeck boards. Brings up the
//! display and inputs described by `console.toml` and hands them to the
//! UI task. Scanning and attack execution live on the radio side and talk
//! to the UI only through the statics in `channels`.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_time::Instant;
use {defmt_rtt as _, panic_probe as _};

use wardeck_core::config::{parse_config, ConsoleConfig, InputKind};
use wardeck_core::input::{GpioButtons, JoystickInput};
use wardeck_core::Console;

use crate::board::{AdcAxis, AnyDisplay, AnyInput, StatusLeds};

mod board;
mod channels;
mod tasks;

/// Embedded console configuration (compiled into firmware)
/// Edit console.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../console.toml");

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Wardeck firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();

    // LEDs first so a dead display is still visible
    let mut leds = StatusLeds::new(
        Output::new(p.PIN_14, Level::Low),
        Output::new(p.PIN_15, Level::Low),
    );

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = config.display.frequency_hz();
    let bus = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    info!("I2C0 at {} Hz", config.display.frequency_hz());

    let (display, display_ok) = AnyDisplay::bring_up(bus, &config.display);

    let input = match config.input.kind {
        InputKind::Buttons => {
            let pull = if config.input.active_low {
                Pull::Up
            } else {
                Pull::Down
            };
            AnyInput::Buttons(
                GpioButtons::new(
                    Input::new(p.PIN_10, pull),
                    Input::new(p.PIN_11, pull),
                    Input::new(p.PIN_12, pull),
                )
                .active_low(config.input.active_low),
            )
        }
        InputKind::Joystick => {
            let adc = Adc::new_blocking(p.ADC, adc::Config::default());
            let y_axis = adc::Channel::new_pin(p.PIN_26, Pull::None);
            AnyInput::Joystick(JoystickInput::with_thresholds(
                AdcAxis::new(adc, y_axis),
                Input::new(p.PIN_12, Pull::Up),
                config.input.joystick_low,
                config.input.joystick_high,
            ))
        }
    };
    info!("Input: {:?}", config.input.kind);

    let mut console = Console::new(&config);
    console.display_ready(display_ok, Instant::now().as_millis());
    let (success, error) = console.indicators().levels(Instant::now().as_millis());
    leds.set(success, error);

    spawner
        .spawn(tasks::ui_task(console, display, input, leds))
        .unwrap();

    info!("All tasks spawned, firmware running");
}

/// Parse the embedded console.toml
///
/// build.rs has already validated the file, so a failure here means the
/// core parser and the build check disagree. Falls back to defaults.
fn load_config() -> ConsoleConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("console.toml line {}: {:?}", e.line, e.kind);
            error!("Using default configuration");
            ConsoleConfig::default()
        }
    }
}
