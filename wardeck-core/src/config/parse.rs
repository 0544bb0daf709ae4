//! Simple TOML parser for console configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! `console.toml`. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - Integers in decimal or `0x` hex
//! - [section] headers
//! - Comments (# ...)
//!
//! Unknown sections and keys are errors, so a typo never silently falls
//! back to a default.

use super::types::{ConsoleConfig, DisplayKind, InputKind};
use crate::attack::AttackType;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Malformed or unknown section header
    InvalidSection,
    /// Line is neither a header nor `key = value`
    InvalidLine,
    /// Key not known in this section
    UnknownKey,
    /// Value has the wrong type or is out of range
    InvalidValue,
}

/// Parse error with its 1-based line number (0 for whole-file checks)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigError {
    pub line: usize,
    pub kind: ParseError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Input,
    Timing,
    Defaults,
}

/// Parse `console.toml` text, starting from the defaults
pub fn parse_config(input: &str) -> Result<ConsoleConfig, ConfigError> {
    let mut config = ConsoleConfig::default();
    let mut section = Section::Root;

    for (idx, line) in input.lines().enumerate() {
        let at = |kind: ParseError| ConfigError {
            line: idx + 1,
            kind,
        };
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let header = strip_comment(line);
            if !header.ends_with(']') {
                return Err(at(ParseError::InvalidSection));
            }
            section = parse_section_header(&header[1..header.len() - 1]).map_err(at)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(at(ParseError::InvalidLine))?;
        apply_value(&mut config, section, key, value).map_err(at)?;
    }

    validate(&config).map_err(|kind| ConfigError { line: 0, kind })?;
    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "display" => Ok(Section::Display),
        "input" => Ok(Section::Input),
        "timing" => Ok(Section::Timing),
        "defaults" => Ok(Section::Defaults),
        _ => Err(ParseError::InvalidSection),
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(hash_pos) if line[..hash_pos].matches('"').count() % 2 == 0 => line[..hash_pos].trim(),
        _ => line,
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = strip_comment(line[eq_pos + 1..].trim());

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        Ok(&value[1..value.len() - 1])
    } else {
        Err(ParseError::InvalidValue)
    }
}

fn parse_int<T: TryFrom<u64>>(value: &str) -> Result<T, ParseError> {
    let raw = strip_underscores(value)?;
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => raw.parse::<u64>(),
    }
    .map_err(|_| ParseError::InvalidValue)?;
    T::try_from(parsed).map_err(|_| ParseError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Integer literals may use `_` separators
fn strip_underscores(value: &str) -> Result<heapless::String<24>, ParseError> {
    let mut out = heapless::String::new();
    for ch in value.chars().filter(|&c| c != '_') {
        out.push(ch).map_err(|_| ParseError::InvalidValue)?;
    }
    Ok(out)
}

fn apply_value(
    config: &mut ConsoleConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Display, "kind") => {
            config.display.kind =
                DisplayKind::from_name(parse_string(value)?).ok_or(ParseError::InvalidValue)?;
        }
        (Section::Display, "address") => {
            let address: u8 = parse_int(value)?;
            if address > 0x7F {
                return Err(ParseError::InvalidValue);
            }
            config.display.address = Some(address);
        }
        (Section::Display, "frequency_hz") => config.display.frequency_hz = Some(parse_int(value)?),

        (Section::Input, "kind") => {
            config.input.kind =
                InputKind::from_name(parse_string(value)?).ok_or(ParseError::InvalidValue)?;
        }
        (Section::Input, "active_low") => config.input.active_low = parse_bool(value)?,
        (Section::Input, "debounce_ms") => config.input.debounce_ms = parse_int(value)?,
        (Section::Input, "settle_ms") => config.input.settle_ms = parse_int(value)?,
        (Section::Input, "release_poll_ms") => config.input.release_poll_ms = parse_int(value)?,
        (Section::Input, "joystick_low") => config.input.joystick_low = parse_int(value)?,
        (Section::Input, "joystick_high") => config.input.joystick_high = parse_int(value)?,

        (Section::Timing, "menu_tick_ms") => config.timing.menu_tick_ms = parse_int(value)?,
        (Section::Timing, "running_tick_ms") => config.timing.running_tick_ms = parse_int(value)?,
        (Section::Timing, "finished_tick_ms") => config.timing.finished_tick_ms = parse_int(value)?,

        (Section::Defaults, "attack_type") => {
            config.defaults.attack_type =
                AttackType::from_name(parse_string(value)?).ok_or(ParseError::InvalidValue)?;
        }
        (Section::Defaults, "timeout_s") => config.defaults.timeout_s = parse_int(value)?,

        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn validate(config: &ConsoleConfig) -> Result<(), ParseError> {
    let t = &config.timing;
    if t.menu_tick_ms == 0 || t.running_tick_ms == 0 || t.finished_tick_ms == 0 {
        return Err(ParseError::InvalidValue);
    }
    if config.input.release_poll_ms == 0 {
        return Err(ParseError::InvalidValue);
    }
    if config.input.joystick_low >= config.input.joystick_high {
        return Err(ParseError::InvalidValue);
    }
    let timeout = config.defaults.timeout_s;
    if timeout < crate::menu::MIN_TIMEOUT || timeout % crate::menu::TIMEOUT_STEP != 0 {
        return Err(ParseError::InvalidValue);
    }
    Ok(())
}
