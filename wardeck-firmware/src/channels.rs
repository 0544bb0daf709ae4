//! Inter-task communication channels
//!
//! Defines the statics shared between the UI task and the radio side
//! (scanner and attack runner). Uses embassy-sync primitives for the
//! message paths and lock-free atomics for the polled attack status.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, TrySendError};
use embassy_sync::signal::Signal;

use wardeck_core::ap::ScanResults;
use wardeck_core::attack::{AttackRequest, CommandBus, PublishError, SharedAttackStatus};

/// Channel capacity for attack requests
const ATTACK_CHANNEL_SIZE: usize = 4;

/// Attack requests from the UI, consumed by the attack runner
pub static ATTACK_REQUESTS: Channel<CriticalSectionRawMutex, AttackRequest, ATTACK_CHANNEL_SIZE> =
    Channel::new();

/// Attack status written by the attack runner, polled by the UI every tick
pub static ATTACK_STATUS: SharedAttackStatus = SharedAttackStatus::new();

/// Signal the scanner to start a scan
pub static SCAN_REQUEST: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Completed scan table from the scanner
pub static SCAN_RESULTS: Signal<CriticalSectionRawMutex, ScanResults> = Signal::new();

/// `CommandBus` over [`ATTACK_REQUESTS`]
///
/// Never waits: a full queue means the attack runner has stalled.
pub struct AttackQueue;

impl CommandBus for AttackQueue {
    fn publish(&mut self, request: &AttackRequest) -> Result<(), PublishError> {
        ATTACK_REQUESTS
            .try_send(*request)
            .map_err(|TrySendError::Full(_)| PublishError::Full)
    }
}
