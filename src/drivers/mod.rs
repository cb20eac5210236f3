//! Actuator drivers and peripheral helpers.

pub mod button;
pub mod spray;
pub mod status_led;
pub mod watchdog;
