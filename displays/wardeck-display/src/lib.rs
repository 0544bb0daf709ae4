//! Two-line text output for the Wardeck console
//!
//! This crate provides:
//! - `TextDisplay`, the single output contract the console renders through
//! - A 5x7 bitmap font and a page-organized `Framebuffer`
//! - Drivers for an SSD1306 OLED and an HD44780 LCD on a PCF8574 backpack
//! - A `Headless` fallback that logs screens when no display is present
//! - Bounded line text types built on `heapless::String`
//!
//! # Architecture
//!
//! The menu logic never sees pixels. It produces two lines of text per
//! pass and hands them to whichever backend was brought up at boot. The
//! OLED backend rasterizes into its frame buffer and flushes page by page,
//! the LCD backend writes character cells directly.
//!
//! Drivers are written against the blocking `embedded-hal` 1.0 I2C and
//! delay traits, so they run unchanged on any HAL and on the host in tests.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod backend;
pub mod font;
pub mod framebuffer;
pub mod headless;
pub mod lcd1602;
pub mod ssd1306;
pub mod text;

// Re-export key types
pub use backend::{DisplayError, TextDisplay};
pub use framebuffer::{Framebuffer, PAGES, WIDTH};
pub use headless::Headless;
pub use lcd1602::Lcd1602;
pub use ssd1306::Ssd1306;
pub use text::{LineText, TwoLines, LINE_CAPACITY};
