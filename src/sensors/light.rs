//! Light-level occupancy sensor.
//!
//! A photo sensor pulls the input high against a 13 kΩ resistor to
//! ground when the room light is on.  The internal pull-up is also
//! enabled, so HIGH = light present = occupied.
//!
//! No debounce or hysteresis: every level change the loop sees is an
//! edge.  A failed read returns the last good level instead of
//! inventing a transition.  A stuck pin fails on every pass of the
//! busy-poll, so only the first failure and every [`WARN_EVERY`]th
//! one after it are logged as warnings.

use embedded_hal::digital::InputPin;
use log::{debug, warn};

use crate::error::SensorError;

/// Read failures between repeated warnings.
pub const WARN_EVERY: u32 = 1_000;

pub struct LightSensor<P> {
    pin: P,
    last: bool,
    read_errors: u32,
}

impl<P: InputPin> LightSensor<P> {
    /// Starts assuming darkness, matching the occupancy FSM's initial state.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            last: false,
            read_errors: 0,
        }
    }

    /// Raw read.
    pub fn read(&mut self) -> Result<bool, SensorError> {
        self.pin.is_high().map_err(|_| SensorError::LightReadFailed)
    }

    /// Current level, falling back to the last good reading on error.
    pub fn level(&mut self) -> bool {
        match self.read() {
            Ok(lit) => {
                self.last = lit;
                lit
            }
            Err(e) => {
                self.read_errors = self.read_errors.saturating_add(1);
                if should_warn(self.read_errors) {
                    warn!("{} (#{}), holding last level {}", e, self.read_errors, self.last);
                } else {
                    debug!("{} (#{})", e, self.read_errors);
                }
                self.last
            }
        }
    }
}

/// Warn on the first failure and every [`WARN_EVERY`]th after.
fn should_warn(failures: u32) -> bool {
    failures % WARN_EVERY == 1
}
