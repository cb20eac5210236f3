//! Mock adapters for integration tests.
//!
//! Records every port call so tests can assert on the full command
//! history without touching real GPIO or sleep registers.

use std::cell::Cell;

use freshener::app::events::AppEvent;
use freshener::app::ports::{ActuatorPort, EventSink, SensorPort, TimePort};
use freshener::app::service::{AppService, PollOutcome};
use freshener::config::DispenserConfig;
use freshener::occupancy::DoseRequest;
use freshener::power::{PowerController, SleepPort, WakeLevel};

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwCall {
    Dispense(u8),
    Blink(u8),
    Indicator(bool),
}

// ── MockHardware ──────────────────────────────────────────────

#[derive(Default)]
pub struct MockHardware {
    pub light: bool,
    pub button: bool,
    pub calls: Vec<HwCall>,
    pub light_reads: u32,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_calls(&mut self) -> Vec<HwCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn doses(&self) -> u32 {
        self.calls
            .iter()
            .map(|c| match c {
                HwCall::Dispense(n) => *n as u32,
                _ => 0,
            })
            .sum()
    }
}

impl SensorPort for MockHardware {
    fn light_on(&mut self) -> bool {
        self.light_reads += 1;
        self.light
    }

    fn button_pressed(&mut self) -> bool {
        self.button
    }
}

impl ActuatorPort for MockHardware {
    fn dispense(&mut self, doses: DoseRequest) {
        self.calls.push(HwCall::Dispense(doses.count()));
    }

    fn blink(&mut self, count: u8) {
        self.calls.push(HwCall::Blink(count));
    }

    fn set_indicator(&mut self, on: bool) {
        self.calls.push(HwCall::Indicator(on));
    }
}

// ── MockClock ─────────────────────────────────────────────────

#[derive(Default)]
pub struct MockClock {
    now: Cell<u64>,
}

#[allow(dead_code)]
impl MockClock {
    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl TimePort for MockClock {
    fn uptime_ms(&self) -> u64 {
        self.now.get()
    }
}

// ── MockSleep ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepCall {
    Arm(WakeLevel),
    Disarm,
    Analog(bool),
    Wait,
}

#[derive(Default)]
pub struct MockSleep {
    pub calls: Vec<SleepCall>,
}

impl SleepPort for MockSleep {
    fn arm_light_wake(&mut self, level: WakeLevel) {
        self.calls.push(SleepCall::Arm(level));
    }

    fn disarm_light_wake(&mut self) {
        self.calls.push(SleepCall::Disarm);
    }

    fn analog_power(&mut self, enabled: bool) {
        self.calls.push(SleepCall::Analog(enabled));
    }

    fn wait_for_wake(&mut self) {
        self.calls.push(SleepCall::Wait);
    }
}

// ── LogSink ───────────────────────────────────────────────────

#[derive(Default)]
pub struct LogSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── Rig ───────────────────────────────────────────────────────

/// A booted service wired to mocks, with the boot sequence cleared.
pub struct Rig {
    pub app: AppService,
    pub hw: MockHardware,
    pub clock: MockClock,
    pub power: PowerController<MockSleep>,
    pub sink: LogSink,
}

#[allow(dead_code)]
impl Rig {
    pub fn unbooted() -> Self {
        Self {
            app: AppService::new(DispenserConfig::default()),
            hw: MockHardware::new(),
            clock: MockClock::default(),
            power: PowerController::new(MockSleep::default()),
            sink: LogSink::default(),
        }
    }

    pub fn booted() -> Self {
        let mut rig = Self::unbooted();
        rig.app
            .boot(&mut rig.hw, &rig.clock, &mut rig.power, &mut rig.sink);
        rig.hw.calls.clear();
        rig.power.port_mut().calls.clear();
        rig.sink.events.clear();
        rig
    }

    /// One awake-loop pass at `now_ms` with the given inputs.
    pub fn step(&mut self, now_ms: u64, light: bool, button: bool) -> PollOutcome {
        self.clock.set(now_ms);
        self.hw.light = light;
        self.hw.button = button;
        self.app
            .step(&mut self.hw, &self.clock, &mut self.power, &mut self.sink)
    }

    /// Light on at `on_ms`, off at `off_ms`; returns the calls of the off pass.
    pub fn session(&mut self, on_ms: u64, off_ms: u64) -> Vec<HwCall> {
        assert_eq!(self.step(on_ms, true, false), PollOutcome::Continue);
        self.hw.calls.clear();
        assert_eq!(self.step(off_ms, false, false), PollOutcome::SleepRequested);
        self.hw.take_calls()
    }
}
