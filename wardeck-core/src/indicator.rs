//! Success and error indicator lines
//!
//! Each line is on while latched or while a timed pulse is running. The
//! UI loop reads the levels every pass and drives the pins.

/// Pulse on boot when the display came up
pub const DISPLAY_OK_PULSE_MS: u64 = 200;
/// Pulse on Up/Down in a configuration screen
pub const ADJUST_PULSE_MS: u64 = 50;
/// Pulse on Select
pub const SELECT_PULSE_MS: u64 = 100;
/// Error pulse when leaving the finished screen
pub const FINISHED_ACK_PULSE_MS: u64 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Line {
    latched: bool,
    pulse_until_ms: Option<u64>,
}

impl Line {
    fn level(&self, now_ms: u64) -> bool {
        self.latched || self.pulse_until_ms.is_some_and(|until| now_ms < until)
    }

    fn expire(&mut self, now_ms: u64) {
        if self.pulse_until_ms.is_some_and(|until| now_ms >= until) {
            self.pulse_until_ms = None;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indicators {
    success: Line,
    error: Line,
}

impl Indicators {
    pub fn new() -> Self {
        Self::default()
    }

    fn line(&mut self, led: Led) -> &mut Line {
        match led {
            Led::Success => &mut self.success,
            Led::Error => &mut self.error,
        }
    }

    /// Light `led` for `duration_ms` from `now_ms`. A later deadline wins.
    pub fn pulse(&mut self, led: Led, now_ms: u64, duration_ms: u64) {
        let until = now_ms.saturating_add(duration_ms);
        let line = self.line(led);
        line.pulse_until_ms = Some(line.pulse_until_ms.map_or(until, |u| u.max(until)));
    }

    /// Hold `led` on (or release it) until changed again
    pub fn latch(&mut self, led: Led, on: bool) {
        self.line(led).latched = on;
    }

    /// Current `(success, error)` levels. Expired pulses are dropped.
    pub fn levels(&mut self, now_ms: u64) -> (bool, bool) {
        self.success.expire(now_ms);
        self.error.expire(now_ms);
        (self.success.level(now_ms), self.error.level(now_ms))
    }

    /// Earliest pending pulse end after `now_ms`
    pub fn next_deadline(&self, now_ms: u64) -> Option<u64> {
        [self.success.pulse_until_ms, self.error.pulse_until_ms]
            .into_iter()
            .flatten()
            .filter(|&until| until > now_ms)
            .min()
    }
}
