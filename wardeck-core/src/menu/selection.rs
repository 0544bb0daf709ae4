//! In-progress attack configuration

use crate::attack::{AttackRequest, AttackType};

/// Timeout adjustment step in seconds
pub const TIMEOUT_STEP: u8 = 5;
/// Shortest selectable timeout
pub const MIN_TIMEOUT: u8 = TIMEOUT_STEP;
/// Longest selectable timeout
pub const MAX_TIMEOUT: u8 = 255;
/// Timeout at power-up
pub const DEFAULT_TIMEOUT: u8 = 30;

/// Values edited on the configuration screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selection {
    pub ap_index: u8,
    pub attack_type: AttackType,
    /// Method counter. Named for Handshake and DOS, a plain number otherwise.
    pub method: u8,
    pub timeout_s: u8,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(AttackType::Handshake, DEFAULT_TIMEOUT)
    }
}

impl Selection {
    /// First AP, method 0, with the given type and a timeout snapped to the step grid
    pub fn new(attack_type: AttackType, timeout_s: u8) -> Self {
        let timeout_s = (timeout_s / TIMEOUT_STEP * TIMEOUT_STEP).max(MIN_TIMEOUT);
        Self {
            ap_index: 0,
            attack_type,
            method: 0,
            timeout_s,
        }
    }

    /// Keep `ap_index` inside the directory
    pub fn clamp_ap(&mut self, ap_count: usize) {
        if ap_count == 0 {
            self.ap_index = 0;
            return;
        }
        let last = (ap_count - 1).min(u8::MAX as usize) as u8;
        if self.ap_index > last {
            self.ap_index = last;
        }
    }

    pub fn ap_up(&mut self, ap_count: usize) {
        if ap_count > 0 {
            self.ap_index = self.ap_index.saturating_sub(1);
        }
    }

    pub fn ap_down(&mut self, ap_count: usize) {
        if ap_count > 0 && (self.ap_index as usize) + 1 < ap_count && self.ap_index < u8::MAX {
            self.ap_index += 1;
        }
    }

    pub fn type_up(&mut self) {
        if let Some(t) = AttackType::from_index(self.attack_type.index().saturating_sub(1)) {
            self.attack_type = t;
        }
    }

    pub fn type_down(&mut self) {
        let next = (self.attack_type.index() + 1).min(AttackType::MAX_INDEX);
        if let Some(t) = AttackType::from_index(next) {
            self.attack_type = t;
        }
    }

    pub fn method_up(&mut self) {
        self.method = self.method.saturating_sub(1);
    }

    /// Named methods cycle through their table; other types count up and
    /// wrap at the counter width.
    pub fn method_down(&mut self) {
        self.method = match self.attack_type.methods() {
            Some(table) => (self.method.wrapping_add(1)) % table.len() as u8,
            None => self.method.wrapping_add(1),
        };
    }

    pub fn timeout_up(&mut self) {
        if self.timeout_s > MIN_TIMEOUT {
            self.timeout_s -= TIMEOUT_STEP;
        }
    }

    pub fn timeout_down(&mut self) {
        self.timeout_s = self.timeout_s.saturating_add(TIMEOUT_STEP).min(MAX_TIMEOUT);
    }

    pub fn to_request(&self) -> AttackRequest {
        AttackRequest {
            ap_index: self.ap_index,
            attack_type: self.attack_type,
            method: self.method,
            timeout_s: self.timeout_s,
        }
    }
}
