//! Board-agnostic core logic for the Wardeck operator console
//!
//! This crate contains all console logic that does not depend on
//! specific hardware implementations:
//!
//! - Access point directory and scan result logging
//! - Attack request, status and dispatch over a command bus
//! - Button sampling and debounce
//! - Menu state machine and screen text
//! - Indicator line patterns
//! - The UI loop tying them together
//! - Configuration types and the `console.toml` parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod ap;
pub mod attack;
pub mod config;
pub mod console;
pub mod indicator;
pub mod input;
pub mod menu;

pub use console::{Console, Tick};
