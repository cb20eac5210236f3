//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (UART / USB-CDC in production).

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | startup blink done, going to sleep");
            }
            AppEvent::OccupancyChanged { from, to } => {
                info!("OCCUPANCY | {:?} -> {:?}", from, to);
            }
            AppEvent::SessionEnded { elapsed_ms, doses } => {
                info!(
                    "DOSE | occupied {}.{:03}s -> {} dose(s)",
                    elapsed_ms / 1000,
                    elapsed_ms % 1000,
                    doses.count()
                );
            }
            AppEvent::ManualDose => {
                info!("MANUAL | button dose");
            }
            AppEvent::Sleeping => {
                info!("POWER | sleep");
            }
            AppEvent::Woke { slept_ms } => {
                info!("POWER | wake after {}ms", slept_ms);
            }
        }
    }
}
