//! Sensor subsystem.
//!
//! The only sensor is the photo switch that stands in for an occupancy
//! detector: lit room = someone inside.

pub mod light;
