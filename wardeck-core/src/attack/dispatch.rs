//! Attack dispatch
//!
//! Turns the confirmed selection into a request and hands it to the
//! attack subsystem over the command bus, exactly once per launch.

use super::request::AttackRequest;
use crate::menu::{MenuScreen, UiSession};

/// Command bus failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PublishError {
    /// No room for another request
    Full,
    /// Nobody is listening on the bus
    Closed,
}

/// Dispatch failures. The firmware treats all of these as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchError {
    /// Command bus rejected the request
    Publish(PublishError),
}

impl From<PublishError> for DispatchError {
    fn from(e: PublishError) -> Self {
        DispatchError::Publish(e)
    }
}

/// Write side of the command bus
pub trait CommandBus {
    fn publish(&mut self, request: &AttackRequest) -> Result<(), PublishError>;
}

impl<T: CommandBus + ?Sized> CommandBus for &mut T {
    fn publish(&mut self, request: &AttackRequest) -> Result<(), PublishError> {
        (**self).publish(request)
    }
}

/// A published request awaiting acknowledgment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DispatchRecord {
    pub request: AttackRequest,
    /// Local uptime when the request was published
    pub dispatched_ms: u64,
    /// The attack side has reported a non-idle state since dispatch
    pub observed_running: bool,
}

/// Publish the current selection and mark the session as awaiting acknowledgment
///
/// The session is only touched once the bus has accepted the request.
pub fn dispatch<B: CommandBus + ?Sized>(
    session: &mut UiSession,
    bus: &mut B,
    now_ms: u64,
) -> Result<AttackRequest, DispatchError> {
    let request = session.selection.to_request();
    info!(
        "Posting attack request: ap={} type={} method={} timeout={}",
        request.ap_index,
        request.attack_type.index(),
        request.method,
        request.timeout_s
    );

    bus.publish(&request).map_err(|e| {
        error!("command bus rejected attack request");
        DispatchError::from(e)
    })?;

    session.dispatch = Some(DispatchRecord {
        request,
        dispatched_ms: now_ms,
        observed_running: false,
    });
    session.screen = MenuScreen::SelectAp;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attack::AttackType;

    #[derive(Default)]
    struct RecordingBus {
        sent: heapless::Vec<AttackRequest, 4>,
        closed: bool,
    }

    impl CommandBus for RecordingBus {
        fn publish(&mut self, request: &AttackRequest) -> Result<(), PublishError> {
            if self.closed {
                return Err(PublishError::Closed);
            }
            self.sent.push(*request).map_err(|_| PublishError::Full)
        }
    }

    #[test]
    fn test_dispatch_publishes_once() {
        let mut session = UiSession::default();
        session.screen = MenuScreen::Confirm;
        session.selection.ap_index = 2;
        session.selection.attack_type = AttackType::Dos;
        let mut bus = RecordingBus::default();

        let request = dispatch(&mut session, &mut bus, 42_000).unwrap();
        assert_eq!(bus.sent.len(), 1);
        assert_eq!(bus.sent[0], request);
        assert_eq!(request.to_bytes(), [2, 3, 0, 30]);
        assert_eq!(
            session.dispatch,
            Some(DispatchRecord {
                request,
                dispatched_ms: 42_000,
                observed_running: false,
            })
        );
        assert_eq!(session.screen, MenuScreen::SelectAp);
    }

    #[test]
    fn test_dispatch_failure_leaves_session() {
        let mut session = UiSession::default();
        session.screen = MenuScreen::Confirm;
        let mut bus = RecordingBus {
            closed: true,
            ..Default::default()
        };
        assert_eq!(
            dispatch(&mut session, &mut bus, 0),
            Err(DispatchError::Publish(PublishError::Closed))
        );
        assert!(!session.awaiting_ack());
        assert_eq!(session.screen, MenuScreen::Confirm);
    }
}
