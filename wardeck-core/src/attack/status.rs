//! Attack progress, as published by the attack subsystem

use portable_atomic::{AtomicU64, AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AttackState {
    #[default]
    Idle = 0,
    Running = 1,
    Finished = 2,
    Timeout = 3,
}

impl AttackState {
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => AttackState::Running,
            2 => AttackState::Finished,
            3 => AttackState::Timeout,
            _ => AttackState::Idle,
        }
    }

    /// Attack has ended, successfully or not
    pub fn is_terminal(&self) -> bool {
        matches!(self, AttackState::Finished | AttackState::Timeout)
    }
}

/// Point-in-time view of the attack subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AttackStatus {
    pub state: AttackState,
    /// Uptime in milliseconds when the attack started
    pub start_ms: u64,
}

/// Lock-free status cell shared between the attack task and the UI
///
/// The two fields are stored independently. A reader may see a new state
/// with the previous start time for one poll, which the console tolerates.
pub struct SharedAttackStatus {
    state: AtomicU8,
    start_ms: AtomicU64,
}

impl Default for SharedAttackStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedAttackStatus {
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(AttackState::Idle as u8),
            start_ms: AtomicU64::new(0),
        }
    }

    pub fn load(&self) -> AttackStatus {
        AttackStatus {
            state: AttackState::from_u8(self.state.load(Ordering::Acquire)),
            start_ms: self.start_ms.load(Ordering::Relaxed),
        }
    }

    pub fn store(&self, status: AttackStatus) {
        self.start_ms.store(status.start_ms, Ordering::Relaxed);
        self.state.store(status.state as u8, Ordering::Release);
    }

    /// Mark an attack as started at `now_ms`
    pub fn start(&self, now_ms: u64) {
        self.store(AttackStatus {
            state: AttackState::Running,
            start_ms: now_ms,
        });
    }

    /// Change only the state
    pub fn set_state(&self, state: AttackState) {
        self.state.store(state as u8, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!AttackState::Idle.is_terminal());
        assert!(!AttackState::Running.is_terminal());
        assert!(AttackState::Finished.is_terminal());
        assert!(AttackState::Timeout.is_terminal());
    }

    #[test]
    fn test_unknown_state_reads_idle() {
        assert_eq!(AttackState::from_u8(200), AttackState::Idle);
    }

    #[test]
    fn test_shared_status() {
        let shared = SharedAttackStatus::new();
        assert_eq!(shared.load(), AttackStatus::default());
        shared.start(1_500);
        assert_eq!(shared.load().state, AttackState::Running);
        assert_eq!(shared.load().start_ms, 1_500);
        shared.set_state(AttackState::Timeout);
        assert_eq!(
            shared.load(),
            AttackStatus {
                state: AttackState::Timeout,
                start_ms: 1_500
            }
        );
    }
}
