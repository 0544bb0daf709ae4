//! Menu screens

/// Screens the console can show
///
/// The first five form the configuration ring. `Running` and `Finished`
/// are never stored in the session; they are shown in place of the ring
/// while a dispatched attack is awaiting acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuScreen {
    #[default]
    SelectAp,
    SelectType,
    SelectMethod,
    SelectTimeout,
    Confirm,
    Running,
    Finished,
}

impl MenuScreen {
    /// Configuration screens in ring order
    pub const RING: [MenuScreen; 5] = [
        MenuScreen::SelectAp,
        MenuScreen::SelectType,
        MenuScreen::SelectMethod,
        MenuScreen::SelectTimeout,
        MenuScreen::Confirm,
    ];

    /// Next screen in ring order. Override screens lead back to `SelectAp`.
    pub fn next(self) -> Self {
        match self {
            MenuScreen::SelectAp => MenuScreen::SelectType,
            MenuScreen::SelectType => MenuScreen::SelectMethod,
            MenuScreen::SelectMethod => MenuScreen::SelectTimeout,
            MenuScreen::SelectTimeout => MenuScreen::Confirm,
            MenuScreen::Confirm | MenuScreen::Running | MenuScreen::Finished => {
                MenuScreen::SelectAp
            }
        }
    }

    /// Shown because of attack status rather than user navigation
    pub fn is_override(&self) -> bool {
        matches!(self, MenuScreen::Running | MenuScreen::Finished)
    }
}
