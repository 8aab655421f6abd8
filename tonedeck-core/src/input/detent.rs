//! Encoder tick to detent conversion

use crate::config::TICKS_PER_DETENT;
use crate::params::Direction;

/// Tracks the last seen detent position of a rotary encoder
///
/// The encoder reports an accumulating quadrature tick count. Detents are
/// ticks divided by [`TICKS_PER_DETENT`], truncating toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DetentTracker {
    last_detent: i32,
}

impl DetentTracker {
    /// Start tracking from a counter reading
    ///
    /// The reading becomes the baseline, so no movement is reported until
    /// the knob actually turns.
    pub const fn new(ticks: i32) -> Self {
        Self {
            last_detent: ticks / TICKS_PER_DETENT,
        }
    }

    /// Compare a new counter reading with the last one
    ///
    /// Returns the direction of travel if the detent count changed. Several
    /// detents in one reading still give a single direction.
    pub fn update(&mut self, ticks: i32) -> Option<Direction> {
        let detent = ticks / TICKS_PER_DETENT;
        let direction = if detent > self.last_detent {
            Direction::Increase
        } else if detent < self.last_detent {
            Direction::Decrease
        } else {
            return None;
        };
        self.last_detent = detent;
        Some(direction)
    }

    /// Last seen detent count
    pub fn detent(&self) -> i32 {
        self.last_detent
    }
}
