//! Headless output
//!
//! Used when no display answered on the bus. Screens go to the log
//! instead, and only when they change.

use crate::backend::{DisplayError, TextDisplay};
use crate::text::TwoLines;

#[derive(Debug, Default)]
pub struct Headless {
    last: TwoLines,
    printed: usize,
}

impl Headless {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent screen content
    pub fn last(&self) -> &TwoLines {
        &self.last
    }

    /// Number of distinct screens logged so far
    pub fn printed(&self) -> usize {
        self.printed
    }
}

impl TextDisplay for Headless {
    fn print_two_lines(&mut self, top: &str, bottom: &str) -> Result<(), DisplayError> {
        let screen = TwoLines::from_strs(top, bottom);
        if self.printed > 0 && screen == self.last {
            return Ok(());
        }
        self.last = screen;
        self.printed += 1;
        debug!("screen: [{}] [{}]", top, bottom);
        Ok(())
    }

    fn columns(&self) -> usize {
        crate::text::LINE_CAPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_only_changes() {
        let mut headless = Headless::new();
        headless.print_two_lines("AP 1/0", "No APs found").unwrap();
        headless.print_two_lines("AP 1/0", "No APs found").unwrap();
        assert_eq!(headless.printed(), 1);
        headless.print_two_lines("Type: PMKID", "Use joystick").unwrap();
        assert_eq!(headless.printed(), 2);
        assert_eq!(headless.last().top(), "Type: PMKID");
    }

    #[test]
    fn test_first_blank_screen_counts() {
        let mut headless = Headless::new();
        headless.print_two_lines("", "").unwrap();
        assert_eq!(headless.printed(), 1);
    }
}
