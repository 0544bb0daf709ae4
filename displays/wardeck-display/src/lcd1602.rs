//! HD44780 16x2 character LCD behind a PCF8574 I2C backpack
//!
//! The expander drives the LCD in 4-bit mode: data nibble on P4-P7,
//! backlight on P3, enable on P2, register select on P0.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::backend::{DisplayError, TextDisplay};
use crate::font;

/// Default PCF8574 backpack address
pub const DEFAULT_ADDRESS: u8 = 0x27;

/// Characters per row
pub const COLUMNS: usize = 16;

/// DDRAM address of each row start
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// Expander pin flags
mod flag {
    pub const BACKLIGHT: u8 = 0x08;
    pub const ENABLE: u8 = 0x04;
    pub const REGISTER_SELECT: u8 = 0x01;
}

/// HD44780 commands
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const ENTRY_MODE_INCREMENT: u8 = 0x06;
    pub const DISPLAY_ON_CURSOR_OFF: u8 = 0x0C;
    pub const FUNCTION_4BIT_2LINE: u8 = 0x28;
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

pub struct Lcd1602<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    initialized: bool,
}

impl<I2C: I2c, D: DelayNs> Lcd1602<I2C, D> {
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_address(i2c, delay, DEFAULT_ADDRESS)
    }

    pub fn with_address(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            initialized: false,
        }
    }

    /// Run the 4-bit power-up handshake and clear the display
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.delay.delay_ms(50);
        self.write4(0x03, flag::BACKLIGHT)?;
        self.delay.delay_us(4500);
        self.write4(0x03, flag::BACKLIGHT)?;
        self.delay.delay_us(4500);
        self.write4(0x03, flag::BACKLIGHT)?;
        self.delay.delay_us(150);
        self.write4(0x02, flag::BACKLIGHT)?;

        self.command(cmd::FUNCTION_4BIT_2LINE)?;
        self.command(cmd::DISPLAY_ON_CURSOR_OFF)?;
        self.command(cmd::ENTRY_MODE_INCREMENT)?;
        self.command(cmd::CLEAR)?;
        self.delay.delay_ms(2);

        self.initialized = true;
        Ok(())
    }

    fn expander_write(&mut self, data: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[data])
            .map_err(|_| DisplayError::Communication)
    }

    fn pulse_enable(&mut self, data: u8) -> Result<(), DisplayError> {
        self.expander_write(data | flag::ENABLE)?;
        self.delay.delay_us(1);
        self.expander_write(data & !flag::ENABLE)?;
        self.delay.delay_us(50);
        Ok(())
    }

    fn write4(&mut self, nibble: u8, flags: u8) -> Result<(), DisplayError> {
        let data = ((nibble & 0x0F) << 4) | (flags & (flag::BACKLIGHT | flag::REGISTER_SELECT));
        self.expander_write(data)?;
        self.pulse_enable(data)
    }

    fn write8(&mut self, value: u8, flags: u8) -> Result<(), DisplayError> {
        self.write4(value >> 4, flags)?;
        self.write4(value & 0x0F, flags)
    }

    fn command(&mut self, value: u8) -> Result<(), DisplayError> {
        self.write8(value, flag::BACKLIGHT)
    }

    fn data(&mut self, value: u8) -> Result<(), DisplayError> {
        self.write8(value, flag::BACKLIGHT | flag::REGISTER_SELECT)
    }

    /// Move the cursor; `col` is clamped to the last visible cell
    pub fn set_cursor(&mut self, col: u8, row: usize) -> Result<(), DisplayError> {
        let offset = ROW_OFFSETS.get(row).copied().unwrap_or(0);
        let col = col.min(COLUMNS as u8 - 1);
        self.command(cmd::SET_DDRAM_ADDR | (col + offset))
    }

    /// Write exactly one row of cells, space padded
    fn write_row(&mut self, row: usize, text: &str) -> Result<(), DisplayError> {
        self.set_cursor(0, row)?;
        let mut bytes = text.bytes();
        for _ in 0..COLUMNS {
            let cell = bytes.next().map(font::printable).unwrap_or(b' ');
            self.data(cell)?;
        }
        Ok(())
    }

    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

impl<I2C: I2c, D: DelayNs> TextDisplay for Lcd1602<I2C, D> {
    fn print_two_lines(&mut self, top: &str, bottom: &str) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        self.write_row(0, top)?;
        self.write_row(1, bottom)
    }

    fn columns(&self) -> usize {
        COLUMNS
    }
}
