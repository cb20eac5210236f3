//! Sleep/wake power management.
//!
//! ```text
//!   boot ──▶ startup blink ──▶ SLEEPING ──[light pin level change]──▶ AWAKE (busy-poll)
//!                                 ▲                                        │
//!                                 └──[light off, dose + feedback done]─────┘
//! ```
//!
//! [`PowerController`] owns the sequencing; the platform primitives sit
//! behind [`SleepPort`].  Sequence for one [`PowerController::sleep`]:
//!
//! 1. arm the light-sensor pin as the only wake source
//! 2. power down the analog domain (ADC)
//! 3. block in the lowest power mode that resumes in place
//! 4. disarm the light-sensor wake source
//! 5. power the analog domain back up
//!
//! Wakeup runs no handler logic of its own.  Everything that follows a
//! wake happens in the normal poll loop after `sleep()` returns.
//!
//! GPIO wakeup on the ESP32 is level-triggered, so "wake on change" is
//! armed as the level opposite to what the sensor reads right now.

use log::{debug, info};

/// Pin level that ends the sleep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeLevel {
    High,
    Low,
}

impl WakeLevel {
    /// The level that would signal a change from the current reading.
    pub fn change_from(light_on: bool) -> Self {
        if light_on { Self::Low } else { Self::High }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    Awake,
    Sleeping,
}

/// Platform primitives for the low-power wait.
pub trait SleepPort {
    /// Enable the light-sensor pin as a wake source at `level`.
    fn arm_light_wake(&mut self, level: WakeLevel);

    /// Remove the light-sensor pin from the wake sources.
    fn disarm_light_wake(&mut self);

    /// Gate the analog peripheral domain.
    fn analog_power(&mut self, enabled: bool);

    /// Block in low-power mode until an armed wake source fires.
    /// No timeout: this is the device's resting state.
    fn wait_for_wake(&mut self);
}

pub struct PowerController<S: SleepPort> {
    port: S,
    state: PowerState,
    sleep_count: u32,
}

impl<S: SleepPort> PowerController<S> {
    pub fn new(port: S) -> Self {
        Self {
            port,
            state: PowerState::Awake,
            sleep_count: 0,
        }
    }

    /// Sleep until the light level changes from `light_on`.
    pub fn sleep(&mut self, light_on: bool) {
        let level = WakeLevel::change_from(light_on);
        info!("Power: sleeping, wake on light {:?}", level);

        self.port.arm_light_wake(level);
        self.port.analog_power(false);

        self.state = PowerState::Sleeping;
        self.sleep_count = self.sleep_count.wrapping_add(1);
        self.port.wait_for_wake();
        self.state = PowerState::Awake;

        self.port.disarm_light_wake();
        self.port.analog_power(true);
        debug!("Power: awake (sleep #{})", self.sleep_count);
    }

    pub fn state(&self) -> PowerState {
        self.state
    }

    /// Number of completed sleeps since boot.
    pub fn sleep_count(&self) -> u32 {
        self.sleep_count
    }

    pub fn port(&self) -> &S {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut S {
        &mut self.port
    }
}
