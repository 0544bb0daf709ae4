//! Bounded line text
//!
//! Fixed-capacity text for the two screen lines. Writes past capacity are
//! dropped on a character boundary instead of failing.

use core::fmt::{self, Write};
use heapless::String;

/// Maximum characters held per line
pub const LINE_CAPACITY: usize = 32;

/// One line of screen text
pub type LineText = String<LINE_CAPACITY>;

/// `fmt::Write` adapter that silently truncates at capacity
pub struct Truncating<'a> {
    line: &'a mut LineText,
}

impl<'a> Truncating<'a> {
    pub fn new(line: &'a mut LineText) -> Self {
        Self { line }
    }
}

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.line.push(ch).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Format into a fresh line, truncating at capacity
pub fn format_line(args: fmt::Arguments<'_>) -> LineText {
    let mut line = LineText::new();
    let _ = Truncating::new(&mut line).write_fmt(args);
    line
}

/// Copy `text` into a fresh line, truncating at capacity
pub fn line_from(text: &str) -> LineText {
    let mut line = LineText::new();
    let _ = Truncating::new(&mut line).write_str(text);
    line
}

/// `format_line` with `format!` syntax
#[macro_export]
macro_rules! text_line {
    ($($arg:tt)*) => {
        $crate::text::format_line(format_args!($($arg)*))
    };
}

/// The two lines shown on screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TwoLines {
    pub top: LineText,
    pub bottom: LineText,
}

impl TwoLines {
    pub fn new(top: LineText, bottom: LineText) -> Self {
        Self { top, bottom }
    }

    pub fn from_strs(top: &str, bottom: &str) -> Self {
        Self {
            top: line_from(top),
            bottom: line_from(bottom),
        }
    }

    pub fn top(&self) -> &str {
        self.top.as_str()
    }

    pub fn bottom(&self) -> &str {
        self.bottom.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line(format_args!("AP {}/{}", 2, 7));
        assert_eq!(line.as_str(), "AP 2/7");
    }

    #[test]
    fn test_line_macro() {
        assert_eq!(text_line!("Left: {:>3}s", 20).as_str(), "Left:  20s");
    }

    #[test]
    fn test_truncates_at_capacity() {
        let long = "0123456789012345678901234567890123456789";
        let line = line_from(long);
        assert_eq!(line.len(), LINE_CAPACITY);
        assert_eq!(line.as_str(), &long[..LINE_CAPACITY]);
    }

    #[test]
    fn test_truncates_on_char_boundary() {
        let mut text = LineText::new();
        for _ in 0..31 {
            text.push('a').unwrap();
        }
        let mut w = Truncating::new(&mut text);
        w.write_str("é").unwrap();
        assert_eq!(text.len(), 31);
    }

    #[test]
    fn test_two_lines() {
        let lines = TwoLines::from_strs("Start", "Press to confirm");
        assert_eq!(lines.top(), "Start");
        assert_eq!(lines.bottom(), "Press to confirm");
    }
}
