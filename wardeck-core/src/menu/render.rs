//! Screen text
//!
//! Every screen renders to exactly two lines. The text here is what the
//! operator sees, so tests treat it as golden output.

use wardeck_display::text::{line_from, TwoLines};
use wardeck_display::text_line;

use super::screen::MenuScreen;
use super::session::UiSession;
use crate::ap::ApDirectory;

/// Seconds left on an attack dispatched at `dispatched_ms`, floored at zero
pub fn remaining_secs(timeout_s: u8, dispatched_ms: u64, now_ms: u64) -> u64 {
    let elapsed_s = now_ms.saturating_sub(dispatched_ms) / 1000;
    (timeout_s as u64).saturating_sub(elapsed_s)
}

/// Text for `view` given the session and directory
pub fn render<A: ApDirectory + ?Sized>(
    session: &UiSession,
    view: MenuScreen,
    aps: &A,
    now_ms: u64,
) -> TwoLines {
    let sel = &session.selection;

    match view {
        MenuScreen::SelectAp => {
            let count = aps.count();
            let top = text_line!("AP {}/{}", sel.ap_index as usize + 1, count);
            let bottom = match aps.record_at(sel.ap_index as usize) {
                Some(record) if count > 0 => record.ssid_text(),
                _ => line_from("No APs found"),
            };
            TwoLines::new(top, bottom)
        }
        MenuScreen::SelectType => TwoLines::new(
            text_line!("Type: {}", sel.attack_type.name()),
            line_from("Use joystick"),
        ),
        MenuScreen::SelectMethod => {
            let top = match sel.attack_type.method_name(sel.method) {
                Some(name) => text_line!("Method: {}", name),
                None => text_line!("Method: {}", sel.method),
            };
            TwoLines::new(top, line_from("(press to next)"))
        }
        MenuScreen::SelectTimeout => TwoLines::new(
            text_line!("Timeout: {}s", sel.timeout_s),
            line_from("Press to edit"),
        ),
        MenuScreen::Confirm => TwoLines::from_strs("Start", "Press to confirm"),
        MenuScreen::Running => {
            let (attack_type, remaining) = match &session.dispatch {
                Some(record) => (
                    record.request.attack_type,
                    remaining_secs(record.request.timeout_s, record.dispatched_ms, now_ms),
                ),
                None => (sel.attack_type, 0),
            };
            TwoLines::new(
                text_line!("ATTACK {}", attack_type.name()),
                text_line!("Left: {:>3}s", remaining),
            )
        }
        MenuScreen::Finished => TwoLines::from_strs("Attack finished", "Press to menu"),
    }
}
