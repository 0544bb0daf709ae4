//! Page-organized frame buffer
//!
//! Mirrors the pixel memory of a 128x64 page-addressed controller. Each
//! page is one row of 128 bytes, each byte a vertical strip of 8 pixels
//! with bit 0 at the top.

use crate::font::{self, ADVANCE, GLYPH_WIDTH};

/// Display width in pixels
pub const WIDTH: usize = 128;
/// Display height in pixels
pub const HEIGHT: usize = 64;
/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// Characters that fit on one page at the fixed advance
pub const TEXT_COLUMNS: usize = WIDTH / ADVANCE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Zero every pixel
    pub fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    /// Rasterize one character with its top-left corner at column `x` of `page`.
    ///
    /// Returns the horizontal advance, or 0 when the position is off the
    /// display and nothing was drawn. Columns past the right edge are clipped.
    /// The spacer column after the glyph is cleared when it is on screen.
    pub fn draw_char(&mut self, x: usize, page: usize, code: u8) -> usize {
        if page >= PAGES || x >= WIDTH {
            return 0;
        }

        let glyph = font::glyph(code);
        let row = &mut self.pages[page];
        for (i, &column) in glyph.iter().enumerate() {
            if x + i >= WIDTH {
                break;
            }
            row[x + i] = column;
        }
        if x + GLYPH_WIDTH < WIDTH {
            row[x + GLYPH_WIDTH] = 0;
        }

        ADVANCE
    }

    /// Draw a string starting at pixel column `x`, pixel row `y`.
    ///
    /// `y` must be page aligned. Anything else is logged and ignored so the
    /// buffer is left untouched. Text past the right edge is truncated.
    pub fn draw_text(&mut self, x: usize, y: usize, text: &str) {
        if y % 8 != 0 {
            warn!("draw_text: y must be page aligned, y={}", y);
            return;
        }

        let page = y / 8;
        let mut cursor = x;
        for byte in text.bytes() {
            if cursor >= WIDTH {
                break;
            }
            let advance = self.draw_char(cursor, page, byte);
            if advance == 0 {
                break;
            }
            cursor += advance;
        }
    }

    /// Raw bytes of one page
    pub fn page(&self, page: usize) -> Option<&[u8; WIDTH]> {
        self.pages.get(page)
    }

    /// All pages, top to bottom
    pub fn pages(&self) -> &[[u8; WIDTH]; PAGES] {
        &self.pages
    }

    /// True when no pixel is lit
    pub fn is_blank(&self) -> bool {
        self.pages.iter().all(|p| p.iter().all(|&b| b == 0))
    }
}
