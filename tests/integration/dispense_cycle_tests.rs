//! Occupancy session → dose decision → closing sequence.

use super::mock_hw::{HwCall, Rig};

use freshener::app::events::AppEvent;
use freshener::app::service::PollOutcome;
use freshener::fsm::OccupancyState;
use freshener::occupancy::DoseRequest;

#[test]
fn light_on_lights_indicator_and_starts_session() {
    let mut rig = Rig::booted();
    assert_eq!(rig.step(1_000, true, false), PollOutcome::Continue);
    assert_eq!(rig.hw.take_calls(), vec![HwCall::Indicator(true)]);
    assert_eq!(rig.app.state(), OccupancyState::Occupied);
    assert_eq!(rig.app.session_start_ms(), Some(1_000));
}

#[test]
fn brief_visit_gets_no_dose() {
    let mut rig = Rig::booted();
    let calls = rig.session(1_000, 1_000 + 119_999);
    assert_eq!(calls, vec![HwCall::Blink(6)]);
    assert_eq!(rig.power.sleep_count(), 2);
}

#[test]
fn exactly_short_threshold_gets_no_dose() {
    let mut rig = Rig::booted();
    let calls = rig.session(5_000, 5_000 + 120_000);
    assert_eq!(calls, vec![HwCall::Blink(6)]);
}

#[test]
fn short_session_gets_one_dose() {
    let mut rig = Rig::booted();
    let calls = rig.session(1_000, 1_000 + 121_000);
    assert_eq!(
        calls,
        vec![HwCall::Blink(1), HwCall::Dispense(1), HwCall::Blink(6)]
    );
}

#[test]
fn exactly_long_threshold_still_gets_one_dose() {
    let mut rig = Rig::booted();
    let calls = rig.session(0, 300_000);
    assert_eq!(
        calls,
        vec![HwCall::Blink(1), HwCall::Dispense(1), HwCall::Blink(6)]
    );
}

#[test]
fn long_session_gets_three_doses() {
    let mut rig = Rig::booted();
    let calls = rig.session(2_000, 2_000 + 300_001);
    assert_eq!(
        calls,
        vec![HwCall::Blink(3), HwCall::Dispense(3), HwCall::Blink(6)]
    );
}

#[test]
fn session_end_is_reported_and_cleared() {
    let mut rig = Rig::booted();
    rig.session(1_000, 201_000);

    assert!(!rig.app.session_active());
    assert_eq!(rig.app.state(), OccupancyState::Unoccupied);
    assert_eq!(rig.app.sessions_completed(), 1);
    assert!(rig.sink.events.contains(&AppEvent::SessionEnded {
        elapsed_ms: 200_000,
        doses: DoseRequest::new(1),
    }));
}

#[test]
fn steady_light_never_sleeps() {
    let mut rig = Rig::booted();
    for t in (1_000..400_000).step_by(10_000) {
        assert_eq!(rig.step(t, true, false), PollOutcome::Continue);
    }
    assert_eq!(rig.power.sleep_count(), 1, "only the boot sleep");
    assert_eq!(rig.hw.doses(), 0);
}

#[test]
fn wake_with_light_still_off_keeps_polling() {
    let mut rig = Rig::booted();
    for t in 0..10 {
        assert_eq!(rig.step(t, false, false), PollOutcome::Continue);
    }
    assert!(rig.hw.calls.is_empty());
    assert_eq!(rig.power.sleep_count(), 1);
}

#[test]
fn consecutive_sessions_are_independent() {
    let mut rig = Rig::booted();
    let first = rig.session(0, 400_000);
    let second = rig.session(500_000, 510_000);
    assert_eq!(first[1], HwCall::Dispense(3));
    assert_eq!(second, vec![HwCall::Blink(6)]);
    assert_eq!(rig.app.sessions_completed(), 2);
}
