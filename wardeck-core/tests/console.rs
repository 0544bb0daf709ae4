//! End-to-end console scenarios driven through `Console::tick`

use std::vec::Vec;

use wardeck_core::ap::ApRecord;
use wardeck_core::attack::{
    AttackRequest, AttackState, AttackStatus, AttackType, CommandBus, DispatchError, PublishError,
};
use wardeck_core::config::ConsoleConfig;
use wardeck_core::input::{Button, InputSampler};
use wardeck_core::menu::MenuScreen;
use wardeck_core::{Console, Tick};
use wardeck_display::{DisplayError, TextDisplay};

/// Remembers every screen it was asked to show
#[derive(Default)]
struct Screen {
    shown: Vec<(String, String)>,
}

impl Screen {
    fn last(&self) -> (&str, &str) {
        let (a, b) = self.shown.last().expect("nothing rendered");
        (a.as_str(), b.as_str())
    }
}

impl TextDisplay for Screen {
    fn print_two_lines(&mut self, top: &str, bottom: &str) -> Result<(), DisplayError> {
        self.shown.push((top.into(), bottom.into()));
        Ok(())
    }

    fn columns(&self) -> usize {
        21
    }
}

#[derive(Default)]
struct Bus {
    sent: Vec<AttackRequest>,
    down: bool,
}

impl CommandBus for Bus {
    fn publish(&mut self, request: &AttackRequest) -> Result<(), PublishError> {
        if self.down {
            return Err(PublishError::Closed);
        }
        self.sent.push(*request);
        Ok(())
    }
}

#[derive(Default)]
struct Buttons {
    held: Option<Button>,
}

impl InputSampler for Buttons {
    fn pressed(&mut self, button: Button) -> bool {
        self.held == Some(button)
    }
}

/// Console plus simulated clock and peripherals
struct Rig {
    console: Console,
    now_ms: u64,
    status: AttackStatus,
    buttons: Buttons,
    aps: Vec<ApRecord>,
    screen: Screen,
    bus: Bus,
}

impl Rig {
    fn new(ap_count: usize) -> Self {
        let aps = (0..ap_count)
            .map(|i| {
                let name = format!("net-{}", i);
                ApRecord::new(name.as_bytes(), -40 - i as i8, 1 + i as u8, 3, [i as u8; 6])
            })
            .collect();
        Self {
            console: Console::new(&ConsoleConfig::default()),
            now_ms: 0,
            status: AttackStatus::default(),
            buttons: Buttons::default(),
            aps,
            screen: Screen::default(),
            bus: Bus::default(),
        }
    }

    fn try_tick(&mut self) -> Result<Tick, DispatchError> {
        let tick = self.console.tick(
            self.now_ms,
            self.status,
            &mut self.buttons,
            &self.aps[..],
            &mut self.screen,
            &mut self.bus,
        )?;
        self.now_ms += tick.delay_ms;
        Ok(tick)
    }

    fn tick(&mut self) -> Tick {
        self.try_tick().expect("bus failure")
    }

    /// Hold `button` until the press registers, then release and let it settle
    fn press(&mut self, button: Button) {
        self.buttons.held = Some(button);
        self.tick();
        self.tick();
        self.buttons.held = None;
        for _ in 0..20 {
            self.tick();
        }
    }

    fn shown(&mut self) -> (String, String) {
        self.tick();
        let (a, b) = self.screen.last();
        (a.to_string(), b.to_string())
    }
}

fn pair(a: &str, b: &str) -> (String, String) {
    (a.to_string(), b.to_string())
}

#[test]
fn test_empty_directory_screen() {
    let mut rig = Rig::new(0);
    assert_eq!(rig.shown(), pair("AP 1/0", "No APs found"));
    rig.press(Button::Down);
    assert_eq!(rig.shown(), pair("AP 1/0", "No APs found"));
}

#[test]
fn test_ap_index_clamps() {
    let mut rig = Rig::new(3);
    assert_eq!(rig.shown(), pair("AP 1/3", "net-0"));
    rig.press(Button::Up);
    assert_eq!(rig.shown().0, "AP 1/3");
    for _ in 0..5 {
        rig.press(Button::Down);
    }
    assert_eq!(rig.shown(), pair("AP 3/3", "net-2"));
    assert_eq!(rig.console.session().selection.ap_index, 2);
}

#[test]
fn test_long_hold_is_one_press() {
    let mut rig = Rig::new(5);
    rig.buttons.held = Some(Button::Down);
    for _ in 0..50 {
        rig.tick();
    }
    rig.buttons.held = None;
    rig.tick();
    assert_eq!(rig.console.session().selection.ap_index, 1);
}

#[test]
fn test_ring_screens() {
    let mut rig = Rig::new(1);
    rig.press(Button::Select);
    assert_eq!(rig.shown(), pair("Type: HANDSHAKE", "Use joystick"));
    rig.press(Button::Select);
    assert_eq!(rig.shown(), pair("Method: ROGUE_AP", "(press to next)"));
    rig.press(Button::Down);
    assert_eq!(rig.shown().0, "Method: BROADCAST");
    rig.press(Button::Select);
    assert_eq!(rig.shown(), pair("Timeout: 30s", "Press to edit"));
    rig.press(Button::Select);
    assert_eq!(rig.shown(), pair("Start", "Press to confirm"));
}

#[test]
fn test_timeout_floor() {
    let mut rig = Rig::new(1);
    for _ in 0..3 {
        rig.press(Button::Select);
    }
    for _ in 0..5 {
        rig.press(Button::Up);
    }
    assert_eq!(rig.shown().0, "Timeout: 5s");
    rig.press(Button::Up);
    assert_eq!(rig.shown().0, "Timeout: 5s");
}

#[test]
fn test_numeric_method_for_pmkid() {
    let mut rig = Rig::new(1);
    rig.press(Button::Select);
    rig.press(Button::Down);
    assert_eq!(rig.shown().0, "Type: PMKID");
    rig.press(Button::Select);
    rig.press(Button::Down);
    rig.press(Button::Down);
    rig.press(Button::Down);
    rig.press(Button::Down);
    assert_eq!(rig.shown().0, "Method: 4");
}

/// Walk to Confirm and launch
fn launch(rig: &mut Rig) {
    for _ in 0..4 {
        rig.press(Button::Select);
    }
    assert_eq!(rig.shown().0, "Start");
    rig.status.state = AttackState::Running;
    rig.press(Button::Select);
}

#[test]
fn test_launch_publishes_once() {
    let mut rig = Rig::new(2);
    rig.press(Button::Down);
    launch(&mut rig);
    assert_eq!(rig.bus.sent.len(), 1);
    assert_eq!(
        rig.bus.sent[0],
        AttackRequest {
            ap_index: 1,
            attack_type: AttackType::Handshake,
            method: 0,
            timeout_s: 30,
        }
    );
    assert!(rig.console.session().awaiting_ack());
    // success latched while the attack is watched
    assert!(rig.tick().success_led);
}

#[test]
fn test_running_countdown() {
    let mut rig = Rig::new(1);
    launch(&mut rig);
    let dispatched = rig.console.session().dispatch.expect("dispatched").dispatched_ms;
    rig.now_ms = dispatched + 10_000;
    let tick = rig.tick();
    assert_eq!(tick.view, MenuScreen::Running);
    assert_eq!(rig.screen.last(), ("ATTACK HANDSHAKE", "Left:  20s"));
    assert_eq!(tick.delay_ms, 250);
}

#[test]
fn test_up_down_ignored_while_running() {
    let mut rig = Rig::new(3);
    launch(&mut rig);
    let before = rig.console.session().selection;
    rig.press(Button::Down);
    assert_eq!(rig.console.session().selection, before);
    assert!(rig.console.session().awaiting_ack());
}

#[test]
fn test_leave_running_view() {
    let mut rig = Rig::new(1);
    launch(&mut rig);
    rig.press(Button::Select);
    assert!(!rig.console.session().awaiting_ack());
    // attack still running elsewhere, console back at the start of the ring
    assert_eq!(rig.shown(), pair("AP 1/1", "net-0"));
    assert!(!rig.tick().success_led);
    assert_eq!(rig.bus.sent.len(), 1);
}

#[test]
fn test_finished_then_acknowledge() {
    let mut rig = Rig::new(1);
    launch(&mut rig);
    rig.status.state = AttackState::Finished;
    let tick = rig.tick();
    assert_eq!(tick.view, MenuScreen::Finished);
    assert_eq!(tick.delay_ms, 200);
    assert_eq!(rig.screen.last(), ("Attack finished", "Press to menu"));
    assert!(tick.success_led);

    rig.buttons.held = Some(Button::Select);
    rig.tick();
    let tick = rig.tick();
    assert_eq!(tick.view, MenuScreen::SelectAp);
    assert!(tick.error_led);
    assert!(!tick.success_led);
    // error pulse runs out after 150 ms
    rig.buttons.held = None;
    rig.now_ms += 150;
    assert!(!rig.tick().error_led);

    assert!(!rig.console.session().awaiting_ack());
    assert_eq!(rig.console.session().screen, MenuScreen::SelectAp);
    rig.status.state = AttackState::Running;
    assert_eq!(rig.shown().0, "AP 1/1");
}

#[test]
fn test_timeout_state_shows_finished() {
    let mut rig = Rig::new(1);
    launch(&mut rig);
    rig.status.state = AttackState::Timeout;
    assert_eq!(rig.shown(), pair("Attack finished", "Press to menu"));
}

#[test]
fn test_status_reset_to_idle_shows_finished() {
    let mut rig = Rig::new(1);
    launch(&mut rig);
    rig.now_ms += 60_000;
    assert_eq!(rig.shown(), pair("ATTACK HANDSHAKE", "Left:   0s"));
    rig.status.state = AttackState::Idle;
    assert_eq!(rig.shown(), pair("Attack finished", "Press to menu"));
}

#[test]
fn test_idle_before_pickup_shows_running() {
    let mut rig = Rig::new(1);
    for _ in 0..4 {
        rig.press(Button::Select);
    }
    rig.press(Button::Select);
    assert_eq!(rig.status.state, AttackState::Idle);
    assert_eq!(rig.shown().0, "ATTACK HANDSHAKE");
    rig.status.state = AttackState::Running;
    assert_eq!(rig.shown().0, "ATTACK HANDSHAKE");
}

#[test]
fn test_selection_survives_launch() {
    let mut rig = Rig::new(1);
    rig.press(Button::Select);
    rig.press(Button::Down);
    rig.press(Button::Down);
    for _ in 0..3 {
        rig.press(Button::Select);
    }
    assert_eq!(rig.shown().0, "Start");
    rig.status.state = AttackState::Running;
    rig.press(Button::Select);
    assert_eq!(rig.bus.sent[0].attack_type, AttackType::Dos);
    assert_eq!(rig.screen.last().0, "ATTACK DOS");

    // acknowledge, then the ring still remembers DOS
    rig.press(Button::Select);
    rig.press(Button::Select);
    assert_eq!(rig.shown().0, "Type: DOS");
}

#[test]
fn test_bus_failure_is_reported() {
    let mut rig = Rig::new(1);
    for _ in 0..4 {
        rig.press(Button::Select);
    }
    rig.bus.down = true;
    rig.buttons.held = Some(Button::Select);
    rig.tick();
    let err = rig.try_tick().unwrap_err();
    assert_eq!(err, DispatchError::Publish(PublishError::Closed));
    assert!(!rig.console.session().awaiting_ack());
}

#[test]
fn test_ap_list_shrinks() {
    let mut rig = Rig::new(4);
    for _ in 0..3 {
        rig.press(Button::Down);
    }
    rig.aps.truncate(2);
    assert_eq!(rig.shown(), pair("AP 2/2", "net-1"));
}
