//! Temperature sensor trait

/// Why a temperature sample could not be taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// The ADC did not produce a reading
    ConversionError,
}

/// A sensor sampled once per temperature cadence
pub trait TemperatureSensor {
    /// One reading in degrees Celsius
    fn read_celsius(&mut self) -> Result<f32, SensorError>;
}
