//! Hardware adapter — bridges the GPIO drivers to domain port traits.
//!
//! Owns the light sensor, button, spray motor and status LED, exposing
//! them through [`SensorPort`] and [`ActuatorPort`].  Driver errors stop
//! here: they are logged and the domain carries on, since the dose
//! logic has no error path and there is nobody to report to.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::warn;

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::button::Button;
use crate::drivers::spray::SprayActuator;
use crate::drivers::status_led::StatusLed;
use crate::occupancy::DoseRequest;
use crate::sensors::light::LightSensor;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<L, B, P, R, Led, D> {
    light: LightSensor<L>,
    button: Button<B>,
    spray: SprayActuator<P, R, D>,
    led: StatusLed<Led, D>,
}

impl<L, B, P, R, Led, D> HardwareAdapter<L, B, P, R, Led, D> {
    pub fn new(
        light: LightSensor<L>,
        button: Button<B>,
        spray: SprayActuator<P, R, D>,
        led: StatusLed<Led, D>,
    ) -> Self {
        Self {
            light,
            button,
            spray,
            led,
        }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<L, B, P, R, Led, D> SensorPort for HardwareAdapter<L, B, P, R, Led, D>
where
    L: InputPin,
    B: InputPin,
{
    fn light_on(&mut self) -> bool {
        self.light.level()
    }

    fn button_pressed(&mut self) -> bool {
        match self.button.is_pressed() {
            Ok(pressed) => pressed,
            Err(e) => {
                warn!("{}, treating as released", e);
                false
            }
        }
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<L, B, P, R, Led, D> ActuatorPort for HardwareAdapter<L, B, P, R, Led, D>
where
    P: OutputPin,
    R: OutputPin,
    Led: OutputPin,
    D: DelayNs,
{
    fn dispense(&mut self, doses: DoseRequest) {
        if let Err(e) = self.spray.dispense(doses.count()) {
            warn!("Dispense of {} aborted: {}", doses.count(), e);
        }
    }

    fn blink(&mut self, count: u8) {
        if let Err(e) = self.led.blink(count) {
            warn!("Blink x{} aborted: {}", count, e);
        }
    }

    fn set_indicator(&mut self, on: bool) {
        if let Err(e) = self.led.set(on) {
            warn!("Indicator {} failed: {}", if on { "on" } else { "off" }, e);
        }
    }
}
