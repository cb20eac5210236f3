//! Aerosol spray motor driver (H-bridge, two direction inputs).
//!
//! One dose is a full stroke pair:
//!
//! ```text
//!  press   ▁▁▁███████▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁
//!  release ▁▁▁▁▁▁▁▁▁▁▁▁▁██████████▁▁▁▁▁▁▁▁▁▁▁▁
//!             1000ms  200  1000ms   500 (next dose)
//! ```
//!
//! ## Open loop
//!
//! There is no position or pressure feedback on the mechanism; a dose is
//! correct by construction.  This driver is a dumb actuator.  Generic over
//! `embedded-hal` 1.0 so the exact pin/delay sequence is checkable on the
//! host.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::DispenserConfig;
use crate::error::ActuatorError;

/// Stroke timing, copied out of the config at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeTiming {
    pub press_ms: u32,
    pub settle_ms: u32,
    pub release_ms: u32,
    pub inter_dose_ms: u32,
}

impl From<&DispenserConfig> for StrokeTiming {
    fn from(c: &DispenserConfig) -> Self {
        Self {
            press_ms: c.press_ms,
            settle_ms: c.settle_ms,
            release_ms: c.release_ms,
            inter_dose_ms: c.inter_dose_ms,
        }
    }
}

pub struct SprayActuator<P, R, D> {
    press: P,
    release: R,
    delay: D,
    timing: StrokeTiming,
}

impl<P, R, D> SprayActuator<P, R, D>
where
    P: OutputPin,
    R: OutputPin,
    D: DelayNs,
{
    pub fn new(press: P, release: R, delay: D, timing: StrokeTiming) -> Self {
        Self {
            press,
            release,
            delay,
            timing,
        }
    }

    /// Run `doses` press/release cycles.  Blocks for the whole sequence.
    ///
    /// Zero doses touches no pin.  On a write failure both outputs are
    /// driven inactive before the error is returned.
    pub fn dispense(&mut self, doses: u8) -> Result<(), ActuatorError> {
        if doses == 0 {
            return Ok(());
        }
        let result = self.run(doses);
        if result.is_err() {
            let _ = self.press.set_low();
            let _ = self.release.set_low();
        }
        result
    }

    fn run(&mut self, doses: u8) -> Result<(), ActuatorError> {
        // Return stroke must never overlap the forward stroke.
        self.release.set_low().map_err(|_| ActuatorError::GpioWriteFailed)?;

        for i in 0..doses {
            self.press.set_high().map_err(|_| ActuatorError::GpioWriteFailed)?;
            self.delay.delay_ms(self.timing.press_ms);
            self.press.set_low().map_err(|_| ActuatorError::GpioWriteFailed)?;

            self.delay.delay_ms(self.timing.settle_ms);

            self.release.set_high().map_err(|_| ActuatorError::GpioWriteFailed)?;
            self.delay.delay_ms(self.timing.release_ms);
            self.release.set_low().map_err(|_| ActuatorError::GpioWriteFailed)?;

            if i + 1 < doses {
                self.delay.delay_ms(self.timing.inter_dose_ms);
            }
        }
        Ok(())
    }

}
