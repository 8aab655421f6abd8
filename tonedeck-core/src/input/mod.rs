//! Input sampling
//!
//! Turns raw encoder ticks and button levels into discrete intents. The
//! sampler holds no hardware; the main cycle reads the devices and hands
//! the readings in.

mod button;
mod detent;

pub use button::{ButtonState, ButtonTracker, Edge};
pub use detent::DetentTracker;

use crate::params::Direction;

/// What the user asked for on one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Intent {
    /// Move the selected parameter one step
    Adjust(Direction),
    /// Advance the selection cursor
    CycleSelection,
}

/// Encoder and button reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSampler {
    detents: DetentTracker,
    button: ButtonTracker,
}

impl InputSampler {
    /// Sampler with the encoder baseline at `initial_ticks`
    pub const fn new(initial_ticks: i32) -> Self {
        Self {
            detents: DetentTracker::new(initial_ticks),
            button: ButtonTracker::new(),
        }
    }

    /// Encoder intent for a counter reading, if the knob moved a detent
    pub fn sample_encoder(&mut self, ticks: i32) -> Option<Intent> {
        self.detents.update(ticks).map(Intent::Adjust)
    }

    /// Button intent for a level reading, if a press/release cycle completed
    pub fn sample_button(&mut self, pressed: bool) -> Option<Intent> {
        self.button.update(pressed).then_some(Intent::CycleSelection)
    }

    /// Button state machine, for diagnostics
    pub fn button_state(&self) -> ButtonState {
        self.button.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_intents() {
        let mut sampler = InputSampler::new(0);
        assert_eq!(sampler.sample_encoder(2), None);
        assert_eq!(
            sampler.sample_encoder(4),
            Some(Intent::Adjust(Direction::Increase))
        );
        assert_eq!(
            sampler.sample_encoder(-8),
            Some(Intent::Adjust(Direction::Decrease))
        );
    }

    #[test]
    fn test_button_intents() {
        let mut sampler = InputSampler::new(0);
        assert_eq!(sampler.sample_button(true), None);
        assert_eq!(sampler.button_state(), ButtonState::Pressed);
        assert_eq!(sampler.sample_button(false), Some(Intent::CycleSelection));
        assert_eq!(sampler.sample_button(false), None);
    }

    #[test]
    fn test_encoder_and_button_independent() {
        let mut sampler = InputSampler::new(0);
        sampler.sample_button(true);
        assert!(sampler.sample_encoder(4).is_some());
        assert_eq!(sampler.sample_button(false), Some(Intent::CycleSelection));
    }
}
