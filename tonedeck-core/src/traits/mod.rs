//! Hardware capability traits
//!
//! These traits define the interface between the main cycle and the
//! hardware-specific implementations in `tonedeck-drivers`.

pub mod input;
pub mod processor;
pub mod sensor;

pub use input::{PushButton, RotaryEncoder};
pub use processor::ToneProcessor;
pub use sensor::{SensorError, TemperatureSensor};
pub use tonedeck_display::{CharacterDisplay, DisplayError};
