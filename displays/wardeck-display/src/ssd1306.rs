//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C. Text only,
//! using the 5x7 font at a 6 pixel advance (21 chars per page).

use embedded_hal::i2c::I2c;

use crate::backend::{DisplayError, TextDisplay};
use crate::framebuffer::{Framebuffer, PAGES, TEXT_COLUMNS, WIDTH};

/// Default SSD1306 I2C address (0x3D on some modules)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Pixel row of the second text line (page 4)
pub const BOTTOM_LINE_Y: usize = 32;

/// Control byte: following bytes are commands
const CONTROL_COMMAND: u8 = 0x00;
/// Control byte: following bytes are display data
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
}

/// Power-up command sequence, sent one command per transaction
pub const INIT_SEQUENCE: [u8; 25] = [
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::SET_MEMORY_MODE,
    0x00, // Horizontal addressing
    cmd::SET_SEG_REMAP,
    cmd::SET_COM_SCAN_DEC,
    cmd::SET_COM_PINS,
    0x12,
    cmd::SET_CONTRAST,
    0xCF,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::RESUME_FROM_RAM,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    buffer: Framebuffer,
    initialized: bool,
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Create a driver at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: Framebuffer::new(),
            initialized: false,
        }
    }

    /// Send the power-up sequence and blank the panel
    pub fn init(&mut self) -> Result<(), DisplayError> {
        for &c in INIT_SEQUENCE.iter() {
            self.command(c)?;
        }
        self.initialized = true;
        self.buffer.clear();
        self.flush()
    }

    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, cmd])
            .map_err(|_| DisplayError::Communication)
    }

    /// Clear the frame buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Draw text into the frame buffer at a page-aligned pixel row
    pub fn draw_text(&mut self, x: usize, y: usize, text: &str) {
        self.buffer.draw_text(x, y, text);
    }

    /// Send the frame buffer to the display, one page at a time
    pub fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        let mut data = [0u8; WIDTH + 1];
        data[0] = CONTROL_DATA;

        for page in 0..PAGES {
            let addressing = [
                CONTROL_COMMAND,
                cmd::SET_PAGE_ADDR | page as u8,
                cmd::SET_LOW_COLUMN,
                cmd::SET_HIGH_COLUMN,
            ];
            self.i2c
                .write(self.address, &addressing)
                .map_err(|_| DisplayError::Communication)?;

            data[1..].copy_from_slice(&self.buffer.pages()[page]);
            self.i2c.write(self.address, &data).map_err(|_| {
                error!("ssd1306: page {} write failed", page);
                DisplayError::Communication
            })?;
        }

        Ok(())
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.buffer
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> TextDisplay for Ssd1306<I2C> {
    fn print_two_lines(&mut self, top: &str, bottom: &str) -> Result<(), DisplayError> {
        self.clear();
        self.draw_text(0, 0, top);
        self.draw_text(0, BOTTOM_LINE_Y, bottom);
        self.flush()
    }

    fn columns(&self) -> usize {
        TEXT_COLUMNS
    }
}
