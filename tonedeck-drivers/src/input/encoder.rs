//! Rotary encoder backed by a shared quadrature counter

use tonedeck_core::traits::RotaryEncoder;
use tonedeck_hal::QuadratureCounter;

/// Reads the tick count another task accumulates
pub struct CountingEncoder<'a> {
    counter: &'a QuadratureCounter,
}

impl<'a> CountingEncoder<'a> {
    /// Read from `counter`
    pub fn new(counter: &'a QuadratureCounter) -> Self {
        Self { counter }
    }
}

impl RotaryEncoder for CountingEncoder<'_> {
    fn ticks(&mut self) -> i32 {
        self.counter.count()
    }
}
