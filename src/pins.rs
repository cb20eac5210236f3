//! GPIO pin assignments for the Freshener board (ESP32-S3).
//!
//! Single source of truth.  The HAL hands out pins as typed fields
//! (`peripherals.pins.gpioN`), so `main` checks the drivers it built
//! against [`ASSIGNED`] before anything runs, and the sleep adapter arms
//! its wakeup on the number read back from the light-sensor driver.

use crate::error::Error;

// ---------------------------------------------------------------------------
// Spray motor (H-bridge, two direction inputs)
// ---------------------------------------------------------------------------

/// Digital output: HIGH drives the forward (press) stroke.
pub const PRESS_GPIO: i32 = 1;
/// Digital output: HIGH drives the return (release) stroke.
pub const RELEASE_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// Status LED
// ---------------------------------------------------------------------------

/// Digital output, active-low: LOW = lit.
pub const LED_GPIO: i32 = 3;

// ---------------------------------------------------------------------------
// Inputs (internal pull-ups enabled)
// ---------------------------------------------------------------------------

/// Photo sensor: HIGH = light present (room occupied).
/// The only wake source while sleeping.
pub const LIGHT_SENSOR_GPIO: i32 = 4;

/// Momentary push-button to ground: LOW = pressed.
pub const BUTTON_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Assignment check
// ---------------------------------------------------------------------------

/// GPIO numbers of the five signals, as assigned or as bound to drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMap {
    pub press: i32,
    pub release: i32,
    pub led: i32,
    pub light: i32,
    pub button: i32,
}

/// The board assignment above.
pub const ASSIGNED: PinMap = PinMap {
    press: PRESS_GPIO,
    release: RELEASE_GPIO,
    led: LED_GPIO,
    light: LIGHT_SENSOR_GPIO,
    button: BUTTON_GPIO,
};

impl PinMap {
    /// Fails unless every bound pin matches [`ASSIGNED`].
    pub fn verify(&self) -> Result<(), Error> {
        let checks = [
            (self.press, PRESS_GPIO, "press pin does not match pins::PRESS_GPIO"),
            (self.release, RELEASE_GPIO, "release pin does not match pins::RELEASE_GPIO"),
            (self.led, LED_GPIO, "LED pin does not match pins::LED_GPIO"),
            (self.light, LIGHT_SENSOR_GPIO, "light pin does not match pins::LIGHT_SENSOR_GPIO"),
            (self.button, BUTTON_GPIO, "button pin does not match pins::BUTTON_GPIO"),
        ];
        for (bound, assigned, msg) in checks {
            if bound != assigned {
                return Err(Error::Init(msg));
            }
        }
        Ok(())
    }
}
