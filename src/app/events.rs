//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  They are informational
//! only; nothing on the decision path reads them back.

use crate::fsm::OccupancyState;
use crate::occupancy::DoseRequest;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Boot finished (startup blink shown).
    Started,

    /// Light sensor edge.
    OccupancyChanged {
        from: OccupancyState,
        to: OccupancyState,
    },

    /// A timed session ended and the dose decision was taken.
    SessionEnded { elapsed_ms: u64, doses: DoseRequest },

    /// The button dispensed a dose.
    ManualDose,

    /// About to enter low-power sleep.
    Sleeping,

    /// Back from sleep.
    Woke { slept_ms: u64 },
}
