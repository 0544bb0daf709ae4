//! Analog joystick
//!
//! The Y axis is split into Up and Down by two ADC thresholds. Select is
//! the stick's push switch, which pulls its line low.

use embedded_hal::digital::InputPin;

use super::{Button, InputSampler};

/// Default reading below which the stick counts as Up (12-bit ADC)
pub const DEFAULT_LOW: u16 = 1000;
/// Default reading above which the stick counts as Down
pub const DEFAULT_HIGH: u16 = 3000;

/// Source of raw Y axis readings
pub trait AxisReader {
    /// Latest reading, or `None` if the conversion failed
    fn read_y(&mut self) -> Option<u16>;
}

pub struct JoystickInput<A, B> {
    axis: A,
    button: B,
    low: u16,
    high: u16,
}

impl<A: AxisReader, B: InputPin> JoystickInput<A, B> {
    pub fn new(axis: A, button: B) -> Self {
        Self::with_thresholds(axis, button, DEFAULT_LOW, DEFAULT_HIGH)
    }

    pub fn with_thresholds(axis: A, button: B, low: u16, high: u16) -> Self {
        Self {
            axis,
            button,
            low,
            high,
        }
    }
}

impl<A: AxisReader, B: InputPin> InputSampler for JoystickInput<A, B> {
    fn pressed(&mut self, button: Button) -> bool {
        match button {
            Button::Up => self.axis.read_y().is_some_and(|y| y < self.low),
            Button::Down => self.axis.read_y().is_some_and(|y| y > self.high),
            Button::Select => self.button.is_low().unwrap_or(false),
        }
    }
}
