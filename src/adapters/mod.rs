//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements   | Connects to                   |
//! |-------------|--------------|-------------------------------|
//! | `hardware`  | SensorPort   | light sensor + button GPIO    |
//! |             | ActuatorPort | spray motor H-bridge, LED     |
//! | `log_sink`  | EventSink    | Serial log output             |
//! | `sleep`     | SleepPort    | ESP32 light sleep, GPIO wake  |
//! | `time`      | TimePort     | ESP32 system timer            |

pub mod hardware;
pub mod log_sink;
pub mod sleep;
pub mod time;
