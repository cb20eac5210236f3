//! Manual trigger button.
//!
//! Active-low momentary switch with the internal pull-up enabled.  Read
//! by level on every pass of the awake loop, with no debounce and no edge
//! detection: a press held across several passes reads pressed on each
//! of them.  The dispense sequence itself (over two seconds) is what keeps
//! a normal tap to a single dose.

use embedded_hal::digital::InputPin;

use crate::error::SensorError;

pub struct Button<P> {
    pin: P,
}

impl<P: InputPin> Button<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn is_pressed(&mut self) -> Result<bool, SensorError> {
        self.pin.is_low().map_err(|_| SensorError::ButtonReadFailed)
    }
}
