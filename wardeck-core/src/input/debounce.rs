//! Per-button debounce state machine
//!
//! `Idle -> Pressed -> WaitingForRelease -> Settling -> Idle`. A press is
//! reported once, when the level has stayed high for the debounce window.
//! Holding the button longer produces nothing more until it is released
//! and the settle time has passed.

use heapless::Vec;

use super::{Button, InputSampler};

/// Debounce timings in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceTiming {
    /// Level must stay high this long to count as a press
    pub debounce_ms: u64,
    /// Quiet time after release before a new press is accepted
    pub settle_ms: u64,
}

impl Default for DebounceTiming {
    fn default() -> Self {
        Self {
            debounce_ms: 20,
            settle_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Phase {
    #[default]
    Idle,
    Pressed {
        since_ms: u64,
    },
    WaitingForRelease,
    Settling {
        until_ms: u64,
    },
}

/// Debounce state for one button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonDebouncer {
    phase: Phase,
}

impl ButtonDebouncer {
    pub const fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Feed one level sample. Returns true exactly once per accepted press.
    pub fn update(&mut self, level: bool, now_ms: u64, timing: &DebounceTiming) -> bool {
        if let Phase::Settling { until_ms } = self.phase {
            if now_ms < until_ms {
                return false;
            }
            self.phase = Phase::Idle;
        }

        if self.phase == Phase::Idle {
            if !level {
                return false;
            }
            self.phase = Phase::Pressed { since_ms: now_ms };
        }

        match self.phase {
            Phase::Pressed { since_ms } => {
                if !level {
                    // glitch
                    self.phase = Phase::Idle;
                    false
                } else if now_ms.saturating_sub(since_ms) >= timing.debounce_ms {
                    self.phase = Phase::WaitingForRelease;
                    true
                } else {
                    false
                }
            }
            Phase::WaitingForRelease => {
                if !level {
                    self.phase = Phase::Settling {
                        until_ms: now_ms.saturating_add(timing.settle_ms),
                    };
                }
                false
            }
            Phase::Idle | Phase::Settling { .. } => false,
        }
    }

    /// True unless idle
    pub fn is_busy(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Waiting for the level to drop after a reported press
    pub fn is_held(&self) -> bool {
        self.phase == Phase::WaitingForRelease
    }
}

/// Presses accepted in one poll, in `Button::ALL` order
pub type Events = Vec<Button, 3>;

/// Debouncers for all three buttons
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    timing: DebounceTiming,
    buttons: [ButtonDebouncer; 3],
}

impl Debouncer {
    pub fn new(timing: DebounceTiming) -> Self {
        Self {
            timing,
            buttons: [ButtonDebouncer::new(); 3],
        }
    }

    /// Sample every button once
    pub fn poll<S: InputSampler + ?Sized>(&mut self, sampler: &mut S, now_ms: u64) -> Events {
        let mut events = Events::new();
        for button in Button::ALL {
            let level = sampler.pressed(button);
            if self.buttons[button.slot()].update(level, now_ms, &self.timing) {
                debug!("button press: {:?}", button);
                // capacity equals the number of buttons
                let _ = events.push(button);
            }
        }
        events
    }

    /// Any button between edge and settled
    pub fn is_busy(&self) -> bool {
        self.buttons.iter().any(ButtonDebouncer::is_busy)
    }

    pub fn state(&self, button: Button) -> &ButtonDebouncer {
        &self.buttons[button.slot()]
    }

    pub fn timing(&self) -> &DebounceTiming {
        &self.timing
    }
}
