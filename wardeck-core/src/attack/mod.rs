//! Attack requests, status and dispatch
//!
//! The console never runs attacks itself. It publishes an `AttackRequest`
//! on a `CommandBus` and watches the status the attack subsystem publishes.

mod dispatch;
mod request;
mod status;

pub use dispatch::{dispatch, CommandBus, DispatchError, DispatchRecord, PublishError};
pub use request::{AttackRequest, AttackType};
pub use status::{AttackState, AttackStatus, SharedAttackStatus};
