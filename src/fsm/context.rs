//! Shared mutable context threaded through every FSM handler.
//!
//! `FsmContext` is the single struct that state handlers read from and
//! write to: the latest light reading and timestamp, the occupancy
//! session, the dose thresholds, and the command outputs the service
//! applies after each poll.  It is owned by the main loop through
//! [`AppService`](crate::app::service::AppService); nothing here is global.

use crate::config::DispenserConfig;
use crate::occupancy::{DoseRequest, DoseThresholds, OccupancySession};

// ---------------------------------------------------------------------------
// Outputs (written by state handlers; consumed by the service)
// ---------------------------------------------------------------------------

/// Summary of an occupancy session that just ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedSession {
    pub elapsed_ms: u64,
    pub doses: DoseRequest,
}

/// What the service must do after this poll, in the order listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleCommands {
    /// Solid "occupied" indicator change, if any.
    pub indicator: Option<bool>,
    /// Feedback blinks shown before dispensing.
    pub feedback_blinks: u8,
    /// Doses to dispense.
    pub doses: DoseRequest,
    /// Fixed blink pattern closing every session.
    pub post_cycle_blinks: u8,
    /// Enter low-power sleep once everything above has run.
    pub sleep_requested: bool,
    /// Set when a timed session was consumed on this poll.
    pub completed: Option<CompletedSession>,
}

// ---------------------------------------------------------------------------
// FsmContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct FsmContext {
    // -- Inputs --
    /// Monotonic time of the current poll (ms).
    pub now_ms: u64,
    /// Light sensor level read on the current poll.
    pub light_on: bool,

    // -- Session --
    pub session: OccupancySession,
    pub thresholds: DoseThresholds,

    // -- Outputs --
    pub commands: CycleCommands,

    // -- Configuration --
    pub config: DispenserConfig,
}

impl FsmContext {
    pub fn new(config: DispenserConfig) -> Self {
        Self {
            now_ms: 0,
            light_on: false,
            session: OccupancySession::new(),
            thresholds: DoseThresholds::from_config(&config),
            commands: CycleCommands::default(),
            config,
        }
    }

    /// Hand the accumulated commands to the caller and reset them.
    pub fn take_commands(&mut self) -> CycleCommands {
        core::mem::take(&mut self.commands)
    }
}
