//! Freshener Firmware — Main Entry Point
//!
//! Occupancy-timed aerosol dispenser: the room light going on starts a
//! session, the light going off ends it, and a long enough session earns
//! one or more sprays.  Between sessions the chip is in light sleep.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                    │
//! │                                                           │
//! │  HardwareAdapter     LogEventSink   Esp32TimeAdapter      │
//! │  (Sensor+Actuator)   (EventSink)    (TimePort)            │
//! │  Esp32SleepAdapter (SleepPort, via PowerController)       │
//! │                                                           │
//! │  ──────────────── Port Trait Boundary ──────────────      │
//! │                                                           │
//! │  ┌─────────────────────────────────────────────────┐      │
//! │  │            AppService (pure logic)              │      │
//! │  │   occupancy FSM · dose classification · button  │      │
//! │  └─────────────────────────────────────────────────┘      │
//! └───────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;
use log::info;

use freshener::adapters::hardware::HardwareAdapter;
use freshener::adapters::log_sink::LogEventSink;
use freshener::adapters::sleep::Esp32SleepAdapter;
use freshener::adapters::time::Esp32TimeAdapter;
use freshener::app::service::AppService;
use freshener::config::DispenserConfig;
use freshener::drivers::button::Button;
use freshener::drivers::spray::{SprayActuator, StrokeTiming};
use freshener::drivers::status_led::StatusLed;
use freshener::drivers::watchdog::Watchdog;
use freshener::error::Error;
use freshener::pins::PinMap;
use freshener::power::PowerController;
use freshener::sensors::light::LightSensor;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Freshener v{}                    ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration (baked in at build time) ─────────────
    let config = DispenserConfig::default();
    config.validate()?;
    match serde_json::to_string(&config) {
        Ok(json) => info!("Config: {}", json),
        Err(e) => log::warn!("Config not printable: {}", e),
    }

    // ── 3. GPIO ───────────────────────────────────────────────
    let p = Peripherals::take().map_err(|_| Error::Init("peripherals already taken"))?;

    let mut press = PinDriver::output(p.pins.gpio1)?;
    press.set_low()?;
    let mut release = PinDriver::output(p.pins.gpio2)?;
    release.set_low()?;
    let mut led = PinDriver::output(p.pins.gpio3)?;
    led.set_high()?; // active-low: off

    let mut light = PinDriver::input(p.pins.gpio4)?;
    light.set_pull(Pull::Up)?;
    let mut button = PinDriver::input(p.pins.gpio5)?;
    button.set_pull(Pull::Up)?;

    let bound = PinMap {
        press: press.pin(),
        release: release.pin(),
        led: led.pin(),
        light: light.pin(),
        button: button.pin(),
    };
    bound.verify()?;
    info!("Pins: {:?}", bound);

    // ── 4. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(
        LightSensor::new(light),
        Button::new(button),
        SprayActuator::new(press, release, FreeRtos, StrokeTiming::from(&config)),
        StatusLed::new(led, FreeRtos, &config),
    );
    let clock = Esp32TimeAdapter::new();
    let mut log_sink = LogEventSink::new();
    let mut power = PowerController::new(Esp32SleepAdapter::new(bound.light));

    let watchdog = Watchdog::new(config.worst_case_cycle_ms());

    // ── 5. Boot: blink, then sleep until the light changes ────
    let mut app = AppService::new(config);
    app.boot(&mut hw, &clock, &mut power, &mut log_sink);
    watchdog.feed();

    info!("System ready. Entering poll loop.");

    // ── 6. Awake loop ─────────────────────────────────────────
    // Busy-polls with no yield; the closing sequence sleeps inside `step`.
    loop {
        app.step(&mut hw, &clock, &mut power, &mut log_sink);
        watchdog.feed();
    }
}
