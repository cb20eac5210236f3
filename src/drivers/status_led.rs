//! Single-colour status LED driver.
//!
//! The LED sinks into the GPIO: driving the pin **low** lights it.
//! Two uses, both purely informational:
//!
//! - solid on while the room is occupied
//! - N blinks (200 ms on / 200 ms off) as feedback, always ending dark

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::DispenserConfig;
use crate::error::ActuatorError;

pub struct StatusLed<P, D> {
    pin: P,
    delay: D,
    on_ms: u32,
    off_ms: u32,
}

impl<P, D> StatusLed<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    pub fn new(pin: P, delay: D, config: &DispenserConfig) -> Self {
        Self {
            pin,
            delay,
            on_ms: config.blink_on_ms,
            off_ms: config.blink_off_ms,
        }
    }

    pub fn set(&mut self, on: bool) -> Result<(), ActuatorError> {
        let res = if on { self.pin.set_low() } else { self.pin.set_high() };
        res.map_err(|_| ActuatorError::LedWriteFailed)
    }

    /// Blocking blink sequence.
    pub fn blink(&mut self, count: u8) -> Result<(), ActuatorError> {
        for _ in 0..count {
            self.set(true)?;
            self.delay.delay_ms(self.on_ms);
            self.set(false)?;
            self.delay.delay_ms(self.off_ms);
        }
        Ok(())
    }
}
