//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (sensors, actuators, clock, event sinks) implement these
//! traits.  The [`AppService`](super::service::AppService) consumes them via
//! generics, so the domain core never touches hardware directly.  The sleep
//! primitives live next to their sequencing logic in
//! [`power::SleepPort`](crate::power::SleepPort).
//!
//! None of these methods return errors: every signal is an unconditional
//! digital read or write, and adapters absorb driver failures themselves.

use crate::occupancy::DoseRequest;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain polls the two inputs through this.
pub trait SensorPort {
    /// `true` while the light sensor sees light (room occupied).
    fn light_on(&mut self) -> bool;

    /// `true` while the manual button is held down.  Not debounced.
    fn button_pressed(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain commands the spray motor and LED.
/// Every call blocks until the physical sequence has finished.
pub trait ActuatorPort {
    /// Run `doses` press/release cycles.  Zero is a no-op.
    fn dispense(&mut self, doses: DoseRequest);

    /// Blink the status LED `count` times, leaving it off.
    fn blink(&mut self, count: u8);

    /// Hold the status LED solid on or off.
    fn set_indicator(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Time port
// ───────────────────────────────────────────────────────────────

/// Monotonic clock.
pub trait TimePort {
    /// Milliseconds since boot.  Never goes backwards.
    fn uptime_ms(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
