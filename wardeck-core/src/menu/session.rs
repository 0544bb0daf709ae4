//! UI session state and button handling

use super::screen::MenuScreen;
use super::selection::Selection;
use crate::attack::{AttackState, DispatchRecord};
use crate::input::Button;

/// What a button press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuAction {
    /// Press had no meaning on this screen
    Ignored,
    /// A selection field changed (or was already at its bound)
    Adjusted,
    /// Moved to the next configuration screen
    Advanced,
    /// Confirm pressed; the caller must dispatch
    Launch,
    /// Override screen dismissed
    Acknowledged(MenuScreen),
}

/// All mutable console state, owned by the UI task
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiSession {
    /// Current configuration screen
    pub screen: MenuScreen,
    pub selection: Selection,
    /// Set by a successful dispatch, cleared by acknowledgment
    pub dispatch: Option<DispatchRecord>,
}

impl UiSession {
    pub fn new(selection: Selection) -> Self {
        Self {
            screen: MenuScreen::SelectAp,
            selection,
            dispatch: None,
        }
    }

    /// A dispatched attack has not yet been dismissed by the user
    pub fn awaiting_ack(&self) -> bool {
        self.dispatch.is_some()
    }

    /// Note the attack state reported this pass
    ///
    /// Any non-idle state means the attack side has picked the request up,
    /// so a later `Idle` is a reset rather than a pending start.
    pub fn observe(&mut self, state: AttackState) {
        if let Some(record) = self.dispatch.as_mut() {
            if state != AttackState::Idle {
                record.observed_running = true;
            }
        }
    }

    /// Screen to show for the given attack state
    ///
    /// While awaiting acknowledgment `Running` shows the countdown and a
    /// terminal state shows `Finished`. `Idle` counts as `Running` until the
    /// attack side has been seen working, and as `Finished` after that.
    pub fn view(&self, state: AttackState) -> MenuScreen {
        let Some(record) = &self.dispatch else {
            return self.screen;
        };
        match state {
            AttackState::Running => MenuScreen::Running,
            AttackState::Idle if !record.observed_running => MenuScreen::Running,
            AttackState::Idle | AttackState::Finished | AttackState::Timeout => {
                MenuScreen::Finished
            }
        }
    }

    /// Apply one button press to the screen `view` as currently shown
    pub fn handle(&mut self, button: Button, view: MenuScreen, ap_count: usize) -> MenuAction {
        if view.is_override() {
            return match button {
                Button::Select => {
                    self.acknowledge();
                    MenuAction::Acknowledged(view)
                }
                Button::Up | Button::Down => MenuAction::Ignored,
            };
        }

        match button {
            Button::Up => {
                self.adjust_up(ap_count);
                MenuAction::Adjusted
            }
            Button::Down => {
                self.adjust_down(ap_count);
                MenuAction::Adjusted
            }
            Button::Select if self.screen == MenuScreen::Confirm => MenuAction::Launch,
            Button::Select => {
                self.screen = self.screen.next();
                MenuAction::Advanced
            }
        }
    }

    /// Leave an override screen and return to the start of the ring
    pub fn acknowledge(&mut self) {
        self.dispatch = None;
        self.screen = MenuScreen::SelectAp;
    }

    fn adjust_up(&mut self, ap_count: usize) {
        let s = &mut self.selection;
        match self.screen {
            MenuScreen::SelectAp => s.ap_up(ap_count),
            MenuScreen::SelectType => s.type_up(),
            MenuScreen::SelectMethod => s.method_up(),
            MenuScreen::SelectTimeout => s.timeout_up(),
            MenuScreen::Confirm | MenuScreen::Running | MenuScreen::Finished => {}
        }
    }

    fn adjust_down(&mut self, ap_count: usize) {
        let s = &mut self.selection;
        match self.screen {
            MenuScreen::SelectAp => s.ap_down(ap_count),
            MenuScreen::SelectType => s.type_down(),
            MenuScreen::SelectMethod => s.method_down(),
            MenuScreen::SelectTimeout => s.timeout_down(),
            MenuScreen::Confirm | MenuScreen::Running | MenuScreen::Finished => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attack::AttackType;

    fn dispatched() -> UiSession {
        let mut session = UiSession::default();
        session.dispatch = Some(DispatchRecord {
            request: session.selection.to_request(),
            dispatched_ms: 0,
            observed_running: false,
        });
        session
    }

    #[test]
    fn test_select_walks_ring() {
        let mut session = UiSession::default();
        let view = session.view(AttackState::Idle);
        assert_eq!(session.handle(Button::Select, view, 3), MenuAction::Advanced);
        assert_eq!(session.screen, MenuScreen::SelectType);
        for _ in 0..3 {
            let view = session.view(AttackState::Idle);
            session.handle(Button::Select, view, 3);
        }
        assert_eq!(session.screen, MenuScreen::Confirm);
        let view = session.view(AttackState::Idle);
        assert_eq!(session.handle(Button::Select, view, 3), MenuAction::Launch);
        assert_eq!(session.screen, MenuScreen::Confirm);
    }

    #[test]
    fn test_up_down_edit_current_field() {
        let mut session = UiSession::default();
        session.screen = MenuScreen::SelectType;
        session.handle(Button::Down, MenuScreen::SelectType, 0);
        assert_eq!(session.selection.attack_type, AttackType::Pmkid);
        session.screen = MenuScreen::SelectTimeout;
        session.handle(Button::Up, MenuScreen::SelectTimeout, 0);
        assert_eq!(session.selection.timeout_s, 25);
        assert_eq!(session.selection.attack_type, AttackType::Pmkid);
    }

    #[test]
    fn test_confirm_ignores_up_down() {
        let mut session = UiSession::default();
        session.screen = MenuScreen::Confirm;
        let before = session.selection;
        session.handle(Button::Up, MenuScreen::Confirm, 3);
        session.handle(Button::Down, MenuScreen::Confirm, 3);
        assert_eq!(session.selection, before);
    }

    #[test]
    fn test_view_overrides() {
        let session = dispatched();
        assert_eq!(session.view(AttackState::Idle), MenuScreen::Running);
        assert_eq!(session.view(AttackState::Running), MenuScreen::Running);
        assert_eq!(session.view(AttackState::Finished), MenuScreen::Finished);
        assert_eq!(session.view(AttackState::Timeout), MenuScreen::Finished);
        assert_eq!(UiSession::default().view(AttackState::Finished), MenuScreen::SelectAp);
    }

    #[test]
    fn test_idle_after_running_is_finished() {
        let mut session = dispatched();
        session.observe(AttackState::Idle);
        assert_eq!(session.view(AttackState::Idle), MenuScreen::Running);
        session.observe(AttackState::Running);
        assert_eq!(session.view(AttackState::Running), MenuScreen::Running);
        session.observe(AttackState::Idle);
        assert_eq!(session.view(AttackState::Idle), MenuScreen::Finished);
    }

    #[test]
    fn test_observe_without_dispatch() {
        let mut session = UiSession::default();
        session.observe(AttackState::Running);
        assert_eq!(session.dispatch, None);
        assert_eq!(session.view(AttackState::Idle), MenuScreen::SelectAp);
    }

    #[test]
    fn test_override_ignores_up_down() {
        let mut session = dispatched();
        let before = session.clone();
        assert_eq!(
            session.handle(Button::Down, MenuScreen::Running, 3),
            MenuAction::Ignored
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_select_acknowledges_finished() {
        let mut session = dispatched();
        session.screen = MenuScreen::SelectTimeout;
        let action = session.handle(Button::Select, MenuScreen::Finished, 3);
        assert_eq!(action, MenuAction::Acknowledged(MenuScreen::Finished));
        assert!(!session.awaiting_ack());
        assert_eq!(session.screen, MenuScreen::SelectAp);
        // later status no longer matters
        assert_eq!(session.view(AttackState::Running), MenuScreen::SelectAp);
    }
}
