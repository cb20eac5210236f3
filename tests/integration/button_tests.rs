//! Manual dose button.

use super::mock_hw::{HwCall, Rig};

use freshener::app::events::AppEvent;
use freshener::app::service::PollOutcome;

#[test]
fn press_dispenses_exactly_one_dose() {
    let mut rig = Rig::booted();
    rig.step(1_000, true, false);
    rig.hw.calls.clear();

    assert_eq!(rig.step(2_000, true, true), PollOutcome::Continue);
    assert_eq!(
        rig.hw.take_calls(),
        vec![HwCall::Blink(1), HwCall::Dispense(1), HwCall::Indicator(true)]
    );
    assert_eq!(rig.app.manual_dose_count(), 1);
    assert_eq!(rig.sink.events.last(), Some(&AppEvent::ManualDose));
}

#[test]
fn press_does_not_touch_the_session() {
    let mut rig = Rig::booted();
    rig.step(1_000, true, false);
    rig.step(60_000, true, true);
    assert_eq!(rig.app.session_start_ms(), Some(1_000));

    // The session still ends on its own timing.
    rig.hw.calls.clear();
    rig.step(1_000 + 121_000, false, false);
    assert!(rig.hw.calls.contains(&HwCall::Dispense(1)));
    assert_eq!(rig.app.sessions_completed(), 1);
}

#[test]
fn held_button_repeats_every_pass() {
    let mut rig = Rig::booted();
    rig.step(1_000, true, false);
    for t in 0..3 {
        rig.step(2_000 + t, true, true);
    }
    assert_eq!(rig.app.manual_dose_count(), 3);
    assert_eq!(rig.hw.doses(), 3);
}

#[test]
fn button_ignored_on_the_off_edge_pass() {
    let mut rig = Rig::booted();
    rig.step(1_000, true, false);
    rig.hw.calls.clear();

    assert_eq!(rig.step(2_000, false, true), PollOutcome::SleepRequested);
    assert_eq!(rig.hw.take_calls(), vec![HwCall::Blink(6)]);
    assert_eq!(rig.app.manual_dose_count(), 0);
}

#[test]
fn button_works_with_light_off_while_awake() {
    let mut rig = Rig::booted();
    rig.step(10, false, true);
    assert_eq!(rig.app.manual_dose_count(), 1);
    assert!(!rig.app.session_active());
}
