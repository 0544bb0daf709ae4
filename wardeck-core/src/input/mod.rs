//! Button input
//!
//! Samplers report the instantaneous level of each logical button. All
//! edge detection and debounce happens in [`Debouncer`], driven by the
//! caller's millisecond clock, so nothing here ever blocks.

mod debounce;
mod gpio;
mod joystick;

pub use debounce::{ButtonDebouncer, DebounceTiming, Debouncer, Events};
pub use gpio::GpioButtons;
pub use joystick::{AxisReader, JoystickInput, DEFAULT_HIGH as JOYSTICK_HIGH, DEFAULT_LOW as JOYSTICK_LOW};

/// Logical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Up,
    Down,
    Select,
}

impl Button {
    /// Evaluation order within one poll
    pub const ALL: [Button; 3] = [Button::Up, Button::Down, Button::Select];

    pub(crate) fn slot(self) -> usize {
        match self {
            Button::Up => 0,
            Button::Down => 1,
            Button::Select => 2,
        }
    }
}

/// Polled level source for the three buttons
pub trait InputSampler {
    /// True while `button` is held
    fn pressed(&mut self, button: Button) -> bool;
}

impl<T: InputSampler + ?Sized> InputSampler for &mut T {
    fn pressed(&mut self, button: Button) -> bool {
        (**self).pressed(button)
    }
}
