//! Dispenser timing parameters
//!
//! Every constant the firmware uses lives here.  Values are baked in at
//! build time; there is no runtime configuration, no NVS, no provisioning.
//! The struct exists so the numbers travel together and can be validated
//! and logged at boot.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Hard ceiling on the automatic dose count.
pub const MAX_AUTO_DOSES: u8 = 3;

/// Baked dispenser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispenserConfig {
    // --- Occupancy thresholds ---
    /// Occupied longer than this earns the short dose (ms)
    pub short_threshold_ms: u64,
    /// Occupied longer than this earns the long dose (ms)
    pub long_threshold_ms: u64,

    // --- Dose counts ---
    pub short_doses: u8,
    pub long_doses: u8,
    pub manual_doses: u8,

    // --- Actuator timing ---
    /// Forward stroke drive time (ms)
    pub press_ms: u32,
    /// Pause between forward and return stroke (ms)
    pub settle_ms: u32,
    /// Return stroke drive time (ms)
    pub release_ms: u32,
    /// Pause between consecutive doses (ms)
    pub inter_dose_ms: u32,

    // --- Indicator timing ---
    pub blink_on_ms: u32,
    pub blink_off_ms: u32,
    /// Blinks shown once at power-on
    pub startup_blinks: u8,
    /// Blinks shown after every occupancy session, dose or not
    pub post_cycle_blinks: u8,
}

impl DispenserConfig {
    /// The production constants.
    pub const fn baked() -> Self {
        Self {
            // Thresholds
            short_threshold_ms: 120_000, // 2 min
            long_threshold_ms: 300_000,  // 5 min

            // Doses
            short_doses: 1,
            long_doses: 3,
            manual_doses: 1,

            // Actuator
            press_ms: 1_000,
            settle_ms: 200,
            release_ms: 1_000,
            inter_dose_ms: 500,

            // Indicator
            blink_on_ms: 200,
            blink_off_ms: 200,
            startup_blinks: 5,
            post_cycle_blinks: 6,
        }
    }

    /// Reject combinations that would break the dose decision.
    pub fn validate(&self) -> Result<(), Error> {
        if self.short_threshold_ms == 0 {
            return Err(Error::Config("short threshold must be non-zero"));
        }
        if self.short_threshold_ms >= self.long_threshold_ms {
            return Err(Error::Config("short threshold must be below long threshold"));
        }
        if self.long_doses > MAX_AUTO_DOSES || self.short_doses > self.long_doses {
            return Err(Error::Config("automatic dose counts out of range"));
        }
        if self.manual_doses != 1 {
            return Err(Error::Config("manual trigger must dispense exactly one dose"));
        }
        Ok(())
    }

    /// Time the actuator is busy for `doses` units (ms).
    pub fn dispense_duration_ms(&self, doses: u8) -> u32 {
        if doses == 0 {
            return 0;
        }
        let unit = self.press_ms + self.settle_ms + self.release_ms;
        unit * doses as u32 + self.inter_dose_ms * (doses as u32 - 1)
    }

    /// Time the indicator is busy for `count` blinks (ms).
    pub fn blink_duration_ms(&self, count: u8) -> u32 {
        (self.blink_on_ms + self.blink_off_ms) * count as u32
    }

    /// Longest stretch the main loop spends blocked between two polls:
    /// long-dose feedback, long dispense, post-cycle blink.
    pub fn worst_case_cycle_ms(&self) -> u32 {
        let session_end = self.blink_duration_ms(self.long_doses)
            + self.dispense_duration_ms(self.long_doses)
            + self.blink_duration_ms(self.post_cycle_blinks);
        let manual = self.blink_duration_ms(1) + self.dispense_duration_ms(self.manual_doses);
        session_end.max(manual)
    }
}

impl Default for DispenserConfig {
    fn default() -> Self {
        Self::baked()
    }
}
