//! Boot sequence and the sleep/wake cycle.

use super::mock_hw::{HwCall, Rig, SleepCall};

use freshener::app::events::AppEvent;
use freshener::power::{PowerState, WakeLevel};

#[test]
fn boot_blinks_then_sleeps() {
    let mut rig = Rig::unbooted();
    rig.app
        .boot(&mut rig.hw, &rig.clock, &mut rig.power, &mut rig.sink);

    assert_eq!(
        rig.hw.calls,
        vec![HwCall::Indicator(false), HwCall::Blink(5)]
    );
    assert_eq!(rig.power.sleep_count(), 1);
    assert_eq!(rig.power.state(), PowerState::Awake);
    assert_eq!(rig.sink.events[0], AppEvent::Started);
    assert_eq!(rig.sink.events[1], AppEvent::Sleeping);
    assert!(matches!(rig.sink.events[2], AppEvent::Woke { .. }));
}

#[test]
fn boot_in_the_dark_arms_wake_on_light_on() {
    let mut rig = Rig::unbooted();
    rig.app
        .boot(&mut rig.hw, &rig.clock, &mut rig.power, &mut rig.sink);

    assert_eq!(
        rig.power.port().calls,
        vec![
            SleepCall::Arm(WakeLevel::High),
            SleepCall::Analog(false),
            SleepCall::Wait,
            SleepCall::Disarm,
            SleepCall::Analog(true),
        ]
    );
}

#[test]
fn boot_with_light_on_arms_wake_on_light_off() {
    let mut rig = Rig::unbooted();
    rig.hw.light = true;
    rig.app
        .boot(&mut rig.hw, &rig.clock, &mut rig.power, &mut rig.sink);
    assert_eq!(rig.power.port().calls[0], SleepCall::Arm(WakeLevel::Low));
}

#[test]
fn one_sleep_per_off_edge() {
    let mut rig = Rig::booted();
    for n in 0..4u64 {
        let base = n * 1_000_000;
        rig.session(base + 1_000, base + 50_000);
    }
    assert_eq!(rig.power.sleep_count(), 1 + 4);
    let waits = rig
        .power
        .port()
        .calls
        .iter()
        .filter(|c| **c == SleepCall::Wait)
        .count();
    assert_eq!(waits, 4);
}

#[test]
fn sleep_follows_the_closing_blink() {
    let mut rig = Rig::booted();
    rig.session(0, 1_000);
    let tail = &rig.sink.events[rig.sink.events.len() - 2..];
    assert_eq!(tail[0], AppEvent::Sleeping);
    assert!(matches!(tail[1], AppEvent::Woke { .. }));
}
