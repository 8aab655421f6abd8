//! LM35 analog temperature sensor
//!
//! The LM35 outputs 10 mV per degree Celsius from 0 V at 0 °C, so the
//! temperature is the raw ADC count divided by a fixed counts-per-degree
//! factor that depends only on the converter's reference and resolution.

use tonedeck_core::traits::{SensorError, TemperatureSensor};
use tonedeck_hal::AdcReader;

/// Counts per degree for a 10-bit ADC on a 1.1 V reference
pub const COUNTS_PER_DEGREE_10BIT_1V1: f32 = 9.31;

/// Counts per degree for a 12-bit ADC on a 3.3 V reference
pub const COUNTS_PER_DEGREE_12BIT_3V3: f32 = 4096.0 / 3300.0 * 10.0;

/// LM35 on one ADC channel
pub struct Lm35<A> {
    adc: A,
    counts_per_degree: f32,
}

impl<A: AdcReader> Lm35<A> {
    /// Sensor scaled for a 10-bit ADC on the 1.1 V reference
    pub fn new(adc: A) -> Self {
        Self::with_scale(adc, COUNTS_PER_DEGREE_10BIT_1V1)
    }

    /// Sensor with an explicit counts-per-degree factor
    pub fn with_scale(adc: A, counts_per_degree: f32) -> Self {
        Self {
            adc,
            counts_per_degree,
        }
    }

    /// Convert a raw reading
    pub fn raw_to_celsius(&self, raw: u16) -> f32 {
        raw as f32 / self.counts_per_degree
    }
}

impl<A: AdcReader> TemperatureSensor for Lm35<A> {
    fn read_celsius(&mut self) -> Result<f32, SensorError> {
        let raw = self.adc.read().map_err(|_| SensorError::ConversionError)?;
        Ok(self.raw_to_celsius(raw))
    }
}
