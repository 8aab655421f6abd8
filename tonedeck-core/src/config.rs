//! Compile-time configuration
//!
//! The controller has no runtime configuration surface. Everything that
//! could be tuned lives here as a constant; [`ControllerConfig`] bundles the
//! few values tests want to override.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw encoder ticks per physical detent (quadrature x4)
pub const TICKS_PER_DETENT: i32 = 4;

/// Number of samples in the temperature rolling average
pub const TEMP_WINDOW: usize = 10;

/// Loop iterations between temperature samples
///
/// A sample is taken on the iteration where the counter exceeds this
/// value, then the counter restarts from zero. This is an iteration count,
/// not a time: the sample rate follows loop throughput.
pub const TEMP_SAMPLE_CADENCE: u32 = 10_000;

/// Main cycle tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControllerConfig {
    /// Iterations between temperature samples
    pub temp_sample_cadence: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            temp_sample_cadence: TEMP_SAMPLE_CADENCE,
        }
    }
}

/// Range and power-on state of one parameter, in centi-dB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Limits {
    /// Lowest position (inclusive)
    pub min_centi_db: i16,
    /// Highest position (inclusive)
    pub max_centi_db: i16,
    /// Change per encoder detent
    pub step_centi_db: i16,
    /// Position at power-on
    pub default_centi_db: i16,
    /// Register byte matching `default_centi_db`
    pub default_byte: u8,
}

/// Volume: 0 dB down to -75 dB attenuation in 1.25 dB steps, -40 dB at power-on
pub const VOLUME_LIMITS: Limits = Limits {
    min_centi_db: -7500,
    max_centi_db: 0,
    step_centi_db: 125,
    default_centi_db: -4000,
    default_byte: 0b0010_0000,
};

/// Treble: +/-14 dB in 2 dB steps, flat at power-on
pub const TREBLE_LIMITS: Limits = Limits {
    min_centi_db: -1400,
    max_centi_db: 1400,
    step_centi_db: 200,
    default_centi_db: 0,
    default_byte: 0b0111_1111,
};

/// Bass: +/-14 dB in 2 dB steps, flat at power-on
pub const BASS_LIMITS: Limits = Limits {
    min_centi_db: -1400,
    max_centi_db: 1400,
    step_centi_db: 200,
    default_centi_db: 0,
    default_byte: 0b0110_1111,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_on_step_grid() {
        for limits in [VOLUME_LIMITS, TREBLE_LIMITS, BASS_LIMITS] {
            let offset = limits.default_centi_db - limits.min_centi_db;
            assert_eq!(offset % limits.step_centi_db, 0);
            assert_eq!((limits.max_centi_db - limits.min_centi_db) % limits.step_centi_db, 0);
        }
    }

    #[test]
    fn test_default_cadence() {
        assert_eq!(ControllerConfig::default().temp_sample_cadence, 10_000);
    }
}
