//! Configuration types
//!
//! Board-agnostic console settings, read from `console.toml` at boot.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ConfigError, ParseError};
pub use types::*;
