//! Three discrete push buttons

use embedded_hal::digital::InputPin;

use super::{Button, InputSampler};

/// Up/Down/Select on separate GPIO lines
///
/// Buttons are active-high with pull-downs by default. A read error is
/// treated as not pressed.
pub struct GpioButtons<U, D, S> {
    up: U,
    down: D,
    select: S,
    active_low: bool,
}

impl<U, D, S> GpioButtons<U, D, S>
where
    U: InputPin,
    D: InputPin,
    S: InputPin,
{
    pub fn new(up: U, down: D, select: S) -> Self {
        Self {
            up,
            down,
            select,
            active_low: false,
        }
    }

    /// Buttons pull the line low when pressed
    pub fn active_low(mut self, active_low: bool) -> Self {
        self.active_low = active_low;
        self
    }
}

fn level<P: InputPin>(pin: &mut P, active_low: bool) -> bool {
    let read = if active_low { pin.is_low() } else { pin.is_high() };
    read.unwrap_or(false)
}

impl<U, D, S> InputSampler for GpioButtons<U, D, S>
where
    U: InputPin,
    D: InputPin,
    S: InputPin,
{
    fn pressed(&mut self, button: Button) -> bool {
        match button {
            Button::Up => level(&mut self.up, self.active_low),
            Button::Down => level(&mut self.down, self.active_low),
            Button::Select => level(&mut self.select, self.active_low),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    struct Pin(bool);

    impl embedded_hal::digital::ErrorType for Pin {
        type Error = Infallible;
    }

    impl InputPin for Pin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    #[test]
    fn test_active_high() {
        let mut buttons = GpioButtons::new(Pin(true), Pin(false), Pin(false));
        assert!(buttons.pressed(Button::Up));
        assert!(!buttons.pressed(Button::Down));
        assert!(!buttons.pressed(Button::Select));
    }

    #[test]
    fn test_active_low() {
        let mut buttons = GpioButtons::new(Pin(true), Pin(false), Pin(true)).active_low(true);
        assert!(!buttons.pressed(Button::Up));
        assert!(buttons.pressed(Button::Down));
        assert!(!buttons.pressed(Button::Select));
    }
}
