//! Menu state machine
//!
//! Five configuration screens in a ring, plus the `Running` and
//! `Finished` screens that replace the ring while a dispatched attack is
//! waiting to be acknowledged.

mod render;
mod screen;
mod selection;
mod session;

pub use render::{remaining_secs, render};
pub use screen::MenuScreen;
pub use selection::{Selection, DEFAULT_TIMEOUT, MAX_TIMEOUT, MIN_TIMEOUT, TIMEOUT_STEP};
pub use session::{MenuAction, UiSession};
