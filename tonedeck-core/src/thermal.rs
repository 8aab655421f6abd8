//! Rolling temperature average
//!
//! A fixed window of the last [`TEMP_WINDOW`] samples with a running sum.
//! The window starts zero-filled, so the average ramps up over the first
//! ten samples after power-on.
//!
//! Sampling is paced by loop iterations, not time: [`TemperatureAverager::tick`]
//! is called once per main cycle and says when the next sample is due.

use crate::config::TEMP_WINDOW;

/// Ring buffer of temperature samples plus the sample cadence counter
#[derive(Debug, Clone)]
pub struct TemperatureAverager {
    samples: [f32; TEMP_WINDOW],
    index: usize,
    sum: f32,
    average: f32,
    cadence: u32,
    counter: u32,
}

impl TemperatureAverager {
    /// Empty window sampling after `cadence` idle iterations
    pub const fn new(cadence: u32) -> Self {
        Self {
            samples: [0.0; TEMP_WINDOW],
            index: 0,
            sum: 0.0,
            average: 0.0,
            cadence,
            counter: 0,
        }
    }

    /// Advance the cadence counter by one iteration
    ///
    /// Returns `true` on the iteration a sample is due. The counter restarts
    /// at zero whenever that happens, whether or not the sample succeeds.
    pub fn tick(&mut self) -> bool {
        if self.counter > self.cadence {
            self.counter = 0;
            true
        } else {
            self.counter += 1;
            false
        }
    }

    /// Replace the oldest slot with `sample` and return the new average
    pub fn push(&mut self, sample: f32) -> f32 {
        self.sum -= self.samples[self.index];
        self.samples[self.index] = sample;
        self.sum += sample;
        self.index = (self.index + 1) % TEMP_WINDOW;
        self.average = self.sum / TEMP_WINDOW as f32;
        self.average
    }

    /// Current average in degrees Celsius
    pub fn average(&self) -> f32 {
        self.average
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TemperatureAverager {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "TemperatureAverager {{ avg: {}, slot: {} }}",
            self.average,
            self.index
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let avg = TemperatureAverager::new(10);
        assert_eq!(avg.average(), 0.0);
    }

    #[test]
    fn test_window_ramps_from_zero() {
        let mut avg = TemperatureAverager::new(10);
        assert_eq!(avg.push(20.0), 2.0);
        assert_eq!(avg.push(20.0), 4.0);
    }

    #[test]
    fn test_full_window_then_evict_oldest() {
        let mut avg = TemperatureAverager::new(10);
        for _ in 0..TEMP_WINDOW {
            avg.push(20.0);
        }
        assert!((avg.average() - 20.0).abs() < 1e-4);

        // Next sample overwrites slot 0
        let result = avg.push(30.0);
        assert!((result - 21.0).abs() < 1e-4);
        assert!((avg.average() - 21.0).abs() < 1e-4);
    }

    #[test]
    fn test_cadence_fires_after_counter_exceeds_limit() {
        let mut avg = TemperatureAverager::new(3);
        // counter 0,1,2,3 -> increments; counter 4 > 3 -> sample
        let fired: [bool; 5] = core::array::from_fn(|_| avg.tick());
        assert_eq!(fired, [false, false, false, false, true]);
        // and again five ticks later
        let fired: [bool; 5] = core::array::from_fn(|_| avg.tick());
        assert_eq!(fired, [false, false, false, false, true]);
    }

    #[test]
    fn test_default_cadence_period() {
        let mut avg = TemperatureAverager::new(crate::config::TEMP_SAMPLE_CADENCE);
        let first = (1..=20_010u32).find(|_| avg.tick());
        assert_eq!(first, Some(10_002));
    }
}
