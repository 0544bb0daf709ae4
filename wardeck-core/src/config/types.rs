//! Console configuration types
//!
//! Defaults reproduce the reference hardware: SSD1306 at 0x3C on a 400 kHz
//! bus, three active-high buttons, Handshake with a 30 s timeout.

use crate::attack::AttackType;
use crate::input::DebounceTiming;
use crate::menu::{Selection, DEFAULT_TIMEOUT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayKind {
    /// 128x64 OLED
    #[default]
    Ssd1306,
    /// 16x2 character LCD on a PCF8574 backpack
    Lcd1602,
    /// No display; screens go to the log
    Headless,
}

impl DisplayKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ssd1306" => Some(DisplayKind::Ssd1306),
            "lcd1602" => Some(DisplayKind::Lcd1602),
            "headless" => Some(DisplayKind::Headless),
            _ => None,
        }
    }

    /// Bus address used when none is configured
    pub fn default_address(&self) -> u8 {
        match self {
            DisplayKind::Ssd1306 | DisplayKind::Headless => 0x3C,
            DisplayKind::Lcd1602 => 0x27,
        }
    }

    /// Bus clock used when none is configured
    pub fn default_frequency_hz(&self) -> u32 {
        match self {
            DisplayKind::Ssd1306 | DisplayKind::Headless => 400_000,
            DisplayKind::Lcd1602 => 100_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayConfig {
    pub kind: DisplayKind,
    /// Overrides the kind's default address
    pub address: Option<u8>,
    /// Overrides the kind's default bus clock
    pub frequency_hz: Option<u32>,
}

impl DisplayConfig {
    pub fn address(&self) -> u8 {
        self.address.unwrap_or_else(|| self.kind.default_address())
    }

    pub fn frequency_hz(&self) -> u32 {
        self.frequency_hz
            .unwrap_or_else(|| self.kind.default_frequency_hz())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputKind {
    /// Three push buttons
    #[default]
    Buttons,
    /// Analog stick with push switch
    Joystick,
}

impl InputKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "buttons" => Some(InputKind::Buttons),
            "joystick" => Some(InputKind::Joystick),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputConfig {
    pub kind: InputKind,
    /// Buttons pull their line low when pressed
    pub active_low: bool,
    pub debounce_ms: u32,
    pub settle_ms: u32,
    /// Loop period while a button is between press and settle
    pub release_poll_ms: u32,
    pub joystick_low: u16,
    pub joystick_high: u16,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            kind: InputKind::Buttons,
            active_low: false,
            debounce_ms: 20,
            settle_ms: 200,
            release_poll_ms: 20,
            joystick_low: crate::input::JOYSTICK_LOW,
            joystick_high: crate::input::JOYSTICK_HIGH,
        }
    }
}

impl InputConfig {
    pub fn debounce_timing(&self) -> DebounceTiming {
        DebounceTiming {
            debounce_ms: self.debounce_ms as u64,
            settle_ms: self.settle_ms as u64,
        }
    }
}

/// Loop periods per screen family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingConfig {
    pub menu_tick_ms: u32,
    pub running_tick_ms: u32,
    pub finished_tick_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            menu_tick_ms: 150,
            running_tick_ms: 250,
            finished_tick_ms: 200,
        }
    }
}

/// Initial selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Defaults {
    pub attack_type: AttackType,
    pub timeout_s: u8,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            attack_type: AttackType::Handshake,
            timeout_s: DEFAULT_TIMEOUT,
        }
    }
}

impl Defaults {
    pub fn selection(&self) -> Selection {
        Selection::new(self.attack_type, self.timeout_s)
    }
}

/// Complete console configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsoleConfig {
    pub display: DisplayConfig,
    pub input: InputConfig,
    pub timing: TimingConfig,
    pub defaults: Defaults,
}
