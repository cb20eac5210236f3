//! Freshener firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod fsm;
pub mod occupancy;
pub mod pins;
pub mod power;

// Drivers and adapters are generic over embedded-hal traits, so they
// build on the host too; the ESP-IDF bodies are cfg-gated inside.
pub mod adapters;
pub mod drivers;
pub mod sensors;
