//! Occupancy session timing and the dose decision.
//!
//! ```text
//!   light on ──▶ OccupancySession::begin(now)
//!   light off ─▶ OccupancySession::take_elapsed(now) ──▶ DoseThresholds::classify ──▶ DoseRequest
//! ```
//!
//! | elapsed e                     | doses |
//! |-------------------------------|-------|
//! | e ≤ short                     | 0     |
//! | short < e ≤ long              | 1     |
//! | e > long                      | 3     |

use crate::config::{DispenserConfig, MAX_AUTO_DOSES};

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Start timestamp of the current occupancy, if one was observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OccupancySession {
    start_ms: Option<u64>,
}

impl OccupancySession {
    pub const fn new() -> Self {
        Self { start_ms: None }
    }

    /// Record the moment the light came on.
    pub fn begin(&mut self, now_ms: u64) {
        self.start_ms = Some(now_ms);
    }

    /// Consume the session: elapsed occupancy, or `None` if no start was
    /// recorded.  The session is empty afterwards either way.
    pub fn take_elapsed(&mut self, now_ms: u64) -> Option<u64> {
        self.start_ms
            .take()
            .map(|start| now_ms.saturating_sub(start))
    }

    /// Drop any recorded start without reading it.
    pub fn clear(&mut self) {
        self.start_ms = None;
    }

    pub fn is_active(&self) -> bool {
        self.start_ms.is_some()
    }

    pub fn start_ms(&self) -> Option<u64> {
        self.start_ms
    }
}

// ---------------------------------------------------------------------------
// Dose request
// ---------------------------------------------------------------------------

/// Number of spray doses to dispense.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct DoseRequest(u8);

impl DoseRequest {
    pub const NONE: Self = Self(0);

    pub const fn new(count: u8) -> Self {
        Self(count)
    }

    pub const fn count(self) -> u8 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// The two occupancy-duration thresholds and the dose each one earns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoseThresholds {
    pub short_ms: u64,
    pub long_ms: u64,
    short_doses: u8,
    long_doses: u8,
}

impl DoseThresholds {
    pub fn from_config(config: &DispenserConfig) -> Self {
        debug_assert!(config.short_threshold_ms < config.long_threshold_ms);
        Self {
            short_ms: config.short_threshold_ms,
            long_ms: config.long_threshold_ms,
            short_doses: config.short_doses,
            long_doses: config.long_doses.min(MAX_AUTO_DOSES),
        }
    }

    /// Strict comparisons: sitting exactly on a threshold does not cross it.
    pub fn classify(&self, elapsed_ms: u64) -> DoseRequest {
        if elapsed_ms > self.long_ms {
            DoseRequest::new(self.long_doses)
        } else if elapsed_ms > self.short_ms {
            DoseRequest::new(self.short_doses)
        } else {
            DoseRequest::NONE
        }
    }
}

impl Default for DoseThresholds {
    fn default() -> Self {
        Self::from_config(&DispenserConfig::baked())
    }
}
