//! Display backend trait
//!
//! The console only ever shows two lines of text. Every display type,
//! pixel or character cell, implements this one output contract.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transaction with the display failed
    Communication,
    /// Display has not been initialized
    NotInitialized,
}

/// Two-line text output
pub trait TextDisplay {
    /// Replace the whole screen with `top` and `bottom`
    ///
    /// Both lines are updated together. Text wider than the display is
    /// truncated.
    fn print_two_lines(&mut self, top: &str, bottom: &str) -> Result<(), DisplayError>;

    /// Visible characters per line
    fn columns(&self) -> usize;
}

impl<T: TextDisplay + ?Sized> TextDisplay for &mut T {
    fn print_two_lines(&mut self, top: &str, bottom: &str) -> Result<(), DisplayError> {
        (**self).print_two_lines(top, bottom)
    }

    fn columns(&self) -> usize {
        (**self).columns()
    }
}
