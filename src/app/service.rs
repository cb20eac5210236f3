//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the occupancy FSM and its context and implements
//! the two pollers that share the awake loop:
//!
//! - **occupancy monitor**: light edges, session timing, dose decision
//! - **button handler**: one immediate dose per pass while the button reads pressed
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!  TimePort   ──▶ │      AppService         │
//! ActuatorPort ◀──│  FSM · session · button │──▶ PowerController
//!                 └────────────────────────┘
//! ```
//!
//! The awake loop is a tight busy-poll with no yield point.  Staying
//! awake while the light is on costs power but keeps the button
//! responsive; the device only sleeps after the light goes off.

use log::{debug, info};

use crate::config::DispenserConfig;
use crate::fsm::context::{CycleCommands, FsmContext};
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, OccupancyState};
use crate::occupancy::DoseRequest;
use crate::power::{PowerController, SleepPort};

use super::events::AppEvent;
use super::ports::{ActuatorPort, EventSink, SensorPort, TimePort};

/// Result of one pass through the awake loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Keep polling.
    Continue,
    /// The light went off and the closing sequence has run.
    SleepRequested,
}

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    fsm: Fsm,
    ctx: FsmContext,
    sessions_completed: u32,
    manual_doses: u32,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// Does **not** touch hardware; call [`boot`](Self::boot) next.
    pub fn new(config: DispenserConfig) -> Self {
        let ctx = FsmContext::new(config);
        let fsm = Fsm::new(build_state_table(), OccupancyState::Unoccupied);
        Self {
            fsm,
            ctx,
            sessions_completed: 0,
            manual_doses: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Start the FSM and show the power-on blink pattern.
    pub fn start(
        &mut self,
        hw: &mut impl ActuatorPort,
        clock: &impl TimePort,
        sink: &mut impl EventSink,
    ) {
        self.ctx.now_ms = clock.uptime_ms();
        self.fsm.start(&mut self.ctx);
        hw.set_indicator(false);
        hw.blink(self.ctx.config.startup_blinks);
        sink.emit(&AppEvent::Started);
        info!("AppService started in {:?}", self.fsm.current_state());
    }

    /// Power-on sequence: startup blink, then straight to sleep.
    pub fn boot<S: SleepPort>(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        clock: &impl TimePort,
        power: &mut PowerController<S>,
        sink: &mut impl EventSink,
    ) {
        self.start(hw, clock, sink);
        self.enter_sleep(hw, clock, power, sink);
    }

    // ── Awake loop ────────────────────────────────────────────

    /// One pass of the awake loop: poll, then sleep if the pass asked for it.
    pub fn step<S: SleepPort>(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        clock: &impl TimePort,
        power: &mut PowerController<S>,
        sink: &mut impl EventSink,
    ) -> PollOutcome {
        let outcome = self.poll(hw, clock, sink);
        if outcome == PollOutcome::SleepRequested {
            self.enter_sleep(hw, clock, power, sink);
        }
        outcome
    }

    /// Read both inputs once and act on them.  Never sleeps by itself.
    ///
    /// `hw` carries **both** [`SensorPort`] and [`ActuatorPort`].
    pub fn poll(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        clock: &impl TimePort,
        sink: &mut impl EventSink,
    ) -> PollOutcome {
        // 1. Occupancy monitor
        self.ctx.now_ms = clock.uptime_ms();
        self.ctx.light_on = hw.light_on();

        if let Some((from, to)) = self.fsm.poll(&mut self.ctx) {
            sink.emit(&AppEvent::OccupancyChanged { from, to });
        }

        let cmds = self.ctx.take_commands();
        self.apply(&cmds, hw, sink);

        if cmds.sleep_requested {
            return PollOutcome::SleepRequested;
        }

        // 2. Button handler
        self.poll_button(hw, sink);
        PollOutcome::Continue
    }

    /// Clear any session left over so nothing survives a sleep.
    pub fn prepare_for_sleep(&mut self) {
        if self.ctx.session.is_active() {
            debug!("Dropping open session before sleep");
        }
        self.ctx.session.clear();
    }

    /// Sleep until the light level changes.
    pub fn enter_sleep<S: SleepPort>(
        &mut self,
        hw: &mut impl SensorPort,
        clock: &impl TimePort,
        power: &mut PowerController<S>,
        sink: &mut impl EventSink,
    ) {
        self.prepare_for_sleep();
        sink.emit(&AppEvent::Sleeping);

        let before = clock.uptime_ms();
        power.sleep(hw.light_on());
        let slept_ms = clock.uptime_ms().saturating_sub(before);

        sink.emit(&AppEvent::Woke { slept_ms });
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current occupancy as seen by the FSM.
    pub fn state(&self) -> OccupancyState {
        self.fsm.current_state()
    }

    /// Whether an occupancy session is being timed.
    pub fn session_active(&self) -> bool {
        self.ctx.session.is_active()
    }

    /// Start timestamp of the running session, if any.
    pub fn session_start_ms(&self) -> Option<u64> {
        self.ctx.session.start_ms()
    }

    /// Occupancy sessions that ended with a timed decision.
    pub fn sessions_completed(&self) -> u32 {
        self.sessions_completed
    }

    /// Doses dispensed from the button since boot.
    pub fn manual_dose_count(&self) -> u32 {
        self.manual_doses
    }

    // ── Internal ──────────────────────────────────────────────

    /// Translate FSM commands into port calls, in the fixed order:
    /// indicator, feedback blink, dispense, closing blink.
    fn apply(
        &mut self,
        cmds: &CycleCommands,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        if let Some(on) = cmds.indicator {
            hw.set_indicator(on);
        }
        if cmds.feedback_blinks > 0 {
            hw.blink(cmds.feedback_blinks);
        }
        if !cmds.doses.is_none() {
            hw.dispense(cmds.doses);
        }
        if let Some(done) = cmds.completed {
            self.sessions_completed = self.sessions_completed.wrapping_add(1);
            sink.emit(&AppEvent::SessionEnded {
                elapsed_ms: done.elapsed_ms,
                doses: done.doses,
            });
        }
        if cmds.post_cycle_blinks > 0 {
            hw.blink(cmds.post_cycle_blinks);
        }
    }

    fn poll_button(&mut self, hw: &mut (impl SensorPort + ActuatorPort), sink: &mut impl EventSink) {
        if !hw.button_pressed() {
            return;
        }
        let dose = DoseRequest::new(self.ctx.config.manual_doses);
        hw.blink(dose.count());
        hw.dispense(dose);
        hw.set_indicator(true);
        self.manual_doses = self.manual_doses.wrapping_add(1);
        sink.emit(&AppEvent::ManualDose);
    }
}
