//! Light-sleep adapter: the platform side of [`SleepPort`].
//!
//! Deep sleep on the ESP32 resets the CPU, so the "block until woken,
//! then carry on" contract maps onto **light sleep** with GPIO wakeup.
//! `esp_light_sleep_start()` returns in place once the light-sensor pin
//! reaches the armed level.  No ISR is registered: the sleep controller
//! ends the wait in hardware and no handler code runs.
//!
//! The analog domain gated around the sleep is the RTC peripheral power
//! domain (SAR ADC, touch, ULP).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: raw `esp_sleep_*` / `gpio_wakeup_*` sys calls.
//! On host/test: logs and returns immediately.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;
use log::debug;

use crate::power::{SleepPort, WakeLevel};

pub struct Esp32SleepAdapter {
    /// GPIO number of the light sensor (see [`crate::pins`]).
    gpio: i32,
}

impl Esp32SleepAdapter {
    pub fn new(light_gpio: i32) -> Self {
        Self { gpio: light_gpio }
    }
}

#[cfg(target_os = "espidf")]
fn check(what: &str, ret: esp_err_t) {
    if ret != ESP_OK as esp_err_t {
        log::warn!("sleep: {} returned {}", what, ret);
    }
}

#[cfg(target_os = "espidf")]
impl SleepPort for Esp32SleepAdapter {
    fn arm_light_wake(&mut self, level: WakeLevel) {
        let intr = match level {
            WakeLevel::High => gpio_int_type_t_GPIO_INTR_HIGH_LEVEL,
            WakeLevel::Low => gpio_int_type_t_GPIO_INTR_LOW_LEVEL,
        };
        // SAFETY: the pin is configured as an input in main before the
        // first sleep; only the main task touches wakeup configuration.
        unsafe {
            check("gpio_wakeup_enable", gpio_wakeup_enable(self.gpio, intr));
            check("esp_sleep_enable_gpio_wakeup", esp_sleep_enable_gpio_wakeup());
        }
        debug!("sleep: GPIO{} armed for {:?}", self.gpio, level);
    }

    fn disarm_light_wake(&mut self) {
        // SAFETY: see arm_light_wake.
        unsafe {
            check("gpio_wakeup_disable", gpio_wakeup_disable(self.gpio));
            check(
                "esp_sleep_disable_wakeup_source",
                esp_sleep_disable_wakeup_source(esp_sleep_source_t_ESP_SLEEP_WAKEUP_GPIO),
            );
        }
    }

    fn analog_power(&mut self, enabled: bool) {
        let option = if enabled {
            esp_sleep_pd_option_t_ESP_PD_OPTION_AUTO
        } else {
            esp_sleep_pd_option_t_ESP_PD_OPTION_OFF
        };
        // SAFETY: power-domain configuration is only read when sleep starts.
        unsafe {
            check(
                "esp_sleep_pd_config",
                esp_sleep_pd_config(esp_sleep_pd_domain_t_ESP_PD_DOMAIN_RTC_PERIPH, option),
            );
        }
    }

    fn wait_for_wake(&mut self) {
        // SAFETY: flushing the console UART and entering light sleep are
        // both called from the main task only.
        unsafe {
            // Let the last log line leave the UART before the clock stops.
            uart_wait_tx_idle_polling(CONFIG_ESP_CONSOLE_UART_NUM as _);
            let ret = esp_light_sleep_start();
            if ret != ESP_OK as esp_err_t {
                // Wake level already present: fall straight back into the poll loop.
                debug!("sleep: light sleep rejected ({})", ret);
            }
        }
    }
}

#[cfg(not(target_os = "espidf"))]
impl SleepPort for Esp32SleepAdapter {
    fn arm_light_wake(&mut self, level: WakeLevel) {
        debug!("sleep(sim): GPIO{} armed for {:?}", self.gpio, level);
    }

    fn disarm_light_wake(&mut self) {
        debug!("sleep(sim): GPIO{} disarmed", self.gpio);
    }

    fn analog_power(&mut self, enabled: bool) {
        debug!("sleep(sim): analog domain {}", if enabled { "on" } else { "off" });
    }

    fn wait_for_wake(&mut self) {
        debug!("sleep(sim): wake immediately");
    }
}
