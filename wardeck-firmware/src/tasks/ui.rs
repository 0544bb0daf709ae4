//! Operator console task
//!
//! Fetches the AP table once, then runs `Console::tick` forever, sleeping
//! for whatever delay each pass asks for.

use defmt::*;
use embassy_time::{with_timeout, Duration, Instant, Timer};
use static_cell::StaticCell;

use wardeck_core::ap::{log_scan_results, ScanResults};
use wardeck_core::Console;

use crate::board::{AnyDisplay, AnyInput, StatusLeds};
use crate::channels::{AttackQueue, ATTACK_STATUS, SCAN_REQUEST, SCAN_RESULTS};

/// Give up on the scanner after this long and run with an empty table
const SCAN_TIMEOUT_S: u64 = 15;

static SCAN_TABLE: StaticCell<ScanResults> = StaticCell::new();

/// Ask the scanner for nearby APs and wait for the table
async fn scan_nearby() -> ScanResults {
    info!("Starting AP scan...");
    SCAN_REQUEST.signal(());

    match with_timeout(Duration::from_secs(SCAN_TIMEOUT_S), SCAN_RESULTS.wait()).await {
        Ok(aps) => aps,
        Err(_) => {
            warn!("No scan results after {}s", SCAN_TIMEOUT_S);
            ScanResults::new()
        }
    }
}

#[embassy_executor::task]
pub async fn ui_task(
    mut console: Console,
    mut display: AnyDisplay,
    mut input: AnyInput,
    mut leds: StatusLeds,
) {
    info!("UI task started");

    let aps: &'static ScanResults = SCAN_TABLE.init(scan_nearby().await);
    log_scan_results(aps);

    let mut bus = AttackQueue;

    loop {
        let now_ms = Instant::now().as_millis();
        let status = ATTACK_STATUS.load();

        match console.tick(now_ms, status, &mut input, aps, &mut display, &mut bus) {
            Ok(tick) => {
                leds.set(tick.success_led, tick.error_led);
                Timer::after_millis(tick.delay_ms).await;
            }
            Err(e) => {
                leds.set(false, true);
                panic!("Attack request lost: {:?}", e);
            }
        }
    }
}
