//! UI loop
//!
//! One call to [`Console::tick`] is one pass of the operator console:
//! read attack status, render the active screen, sample the buttons and
//! react. The caller sleeps for the returned delay and calls again.

use wardeck_display::TextDisplay;

use crate::ap::ApDirectory;
use crate::attack::{dispatch, AttackStatus, CommandBus, DispatchError};
use crate::config::ConsoleConfig;
use crate::indicator::{
    Indicators, Led, ADJUST_PULSE_MS, DISPLAY_OK_PULSE_MS, FINISHED_ACK_PULSE_MS, SELECT_PULSE_MS,
};
use crate::input::{Debouncer, InputSampler};
use crate::menu::{render, MenuAction, MenuScreen, UiSession};

/// Result of one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick {
    /// Screen shown after this pass's input was applied
    pub view: MenuScreen,
    /// Sleep this long before the next pass
    pub delay_ms: u64,
    pub success_led: bool,
    pub error_led: bool,
}

pub struct Console {
    session: UiSession,
    debouncer: Debouncer,
    indicators: Indicators,
    config: ConsoleConfig,
    display_ok: bool,
}

impl Console {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            session: UiSession::new(config.defaults.selection()),
            debouncer: Debouncer::new(config.input.debounce_timing()),
            indicators: Indicators::new(),
            config: *config,
            display_ok: true,
        }
    }

    /// Record the display bring-up result on the indicator lines
    pub fn display_ready(&mut self, ok: bool, now_ms: u64) {
        if ok {
            self.indicators.latch(Led::Error, false);
            self.indicators.pulse(Led::Success, now_ms, DISPLAY_OK_PULSE_MS);
        } else {
            warn!("display init failed, running headless");
            self.indicators.latch(Led::Error, true);
        }
    }

    pub fn session(&self) -> &UiSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut UiSession {
        &mut self.session
    }

    pub fn indicators(&mut self) -> &mut Indicators {
        &mut self.indicators
    }

    /// Run one pass at uptime `now_ms`
    ///
    /// Display errors are logged and otherwise ignored. A command bus
    /// failure is returned and must be treated as fatal.
    pub fn tick<I, A, D, B>(
        &mut self,
        now_ms: u64,
        status: AttackStatus,
        inputs: &mut I,
        aps: &A,
        display: &mut D,
        bus: &mut B,
    ) -> Result<Tick, DispatchError>
    where
        I: InputSampler + ?Sized,
        A: ApDirectory + ?Sized,
        D: TextDisplay + ?Sized,
        B: CommandBus + ?Sized,
    {
        let ap_count = aps.count();
        self.session.selection.clamp_ap(ap_count);
        self.session.observe(status.state);

        let mut view = self.session.view(status.state);
        let lines = render(&self.session, view, aps, now_ms);
        match display.print_two_lines(lines.top(), lines.bottom()) {
            Ok(()) => self.display_ok = true,
            Err(e) => {
                if self.display_ok {
                    warn!("display update failed: {:?}", e);
                }
                self.display_ok = false;
            }
        }

        for button in self.debouncer.poll(inputs, now_ms) {
            match self.session.handle(button, view, ap_count) {
                MenuAction::Ignored => {}
                MenuAction::Adjusted => {
                    self.indicators.pulse(Led::Error, now_ms, ADJUST_PULSE_MS);
                }
                MenuAction::Advanced => {
                    self.indicators.pulse(Led::Success, now_ms, SELECT_PULSE_MS);
                }
                MenuAction::Launch => {
                    self.indicators.pulse(Led::Success, now_ms, SELECT_PULSE_MS);
                    dispatch(&mut self.session, bus, now_ms)?;
                    self.indicators.latch(Led::Success, true);
                }
                MenuAction::Acknowledged(MenuScreen::Finished) => {
                    self.indicators.latch(Led::Success, false);
                    self.indicators.pulse(Led::Error, now_ms, FINISHED_ACK_PULSE_MS);
                }
                MenuAction::Acknowledged(_) => {
                    self.indicators.latch(Led::Success, false);
                    self.indicators.pulse(Led::Success, now_ms, SELECT_PULSE_MS);
                }
            }
            view = self.session.view(status.state);
        }

        let (success_led, error_led) = self.indicators.levels(now_ms);
        Ok(Tick {
            view,
            delay_ms: self.next_delay(view, now_ms),
            success_led,
            error_led,
        })
    }

    fn next_delay(&self, view: MenuScreen, now_ms: u64) -> u64 {
        let timing = &self.config.timing;
        let mut delay = match view {
            MenuScreen::Running => timing.running_tick_ms,
            MenuScreen::Finished => timing.finished_tick_ms,
            _ => timing.menu_tick_ms,
        } as u64;

        if self.debouncer.is_busy() {
            delay = delay.min(self.config.input.release_poll_ms as u64);
        }
        if let Some(deadline) = self.indicators.next_deadline(now_ms) {
            delay = delay.min(deadline - now_ms);
        }
        delay.max(1)
    }
}
