//! Main cycle
//!
//! One call to [`Controller::step`] is one iteration of the control loop:
//!
//! 1. Sample the encoder and move the selected parameter
//! 2. Sample the temperature sensor if the cadence is due
//! 3. Sample the button and advance the selection on a full press/release
//! 4. Send at most one pending register byte (volume, treble, bass order)
//! 5. Redraw whatever changed (temperature, readout/graph, selection)
//!
//! Nothing in a step blocks or waits. Hardware failures never abort a
//! step; they are counted in [`FaultCounters`] and otherwise ignored.

mod controller;

pub use controller::Controller;

use crate::input::InputSampler;
use crate::params::{ParameterKind, ParameterSet, Selection};
use crate::thermal::TemperatureAverager;

/// Everything the main cycle mutates
#[derive(Debug, Clone)]
pub struct State {
    /// Volume, treble and bass
    pub params: ParameterSet,
    /// Parameter the encoder adjusts
    pub selection: Selection,
    /// Encoder and button reconciliation
    pub sampler: InputSampler,
    /// Rolling temperature average and sample cadence
    pub thermal: TemperatureAverager,
}

impl State {
    /// Power-on state
    pub const fn new(temp_sample_cadence: u32) -> Self {
        Self {
            params: ParameterSet::new(),
            selection: Selection::new(),
            sampler: InputSampler::new(0),
            thermal: TemperatureAverager::new(temp_sample_cadence),
        }
    }
}

/// Counts of hardware operations that failed and were skipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaultCounters {
    /// Register writes (including initialisation) the bus rejected
    pub bus_write_failures: u32,
    /// Display operations that failed
    pub display_failures: u32,
    /// Temperature samples that could not be read
    pub sensor_failures: u32,
}

impl FaultCounters {
    /// `true` if nothing has failed yet
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn record_bus_write(&mut self) {
        self.bus_write_failures = self.bus_write_failures.saturating_add(1);
    }

    pub(crate) fn record_display(&mut self) {
        self.display_failures = self.display_failures.saturating_add(1);
    }

    pub(crate) fn record_sensor(&mut self) {
        self.sensor_failures = self.sensor_failures.saturating_add(1);
    }
}

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// The encoder moved at least one detent
    ///
    /// Set even when the selected parameter was already at its limit.
    pub encoder_updated: bool,
    /// A temperature sample was taken
    pub temperature_updated: bool,
    /// The selection advanced
    pub selection_updated: bool,
    /// Register byte sent this step, and whose it was
    pub device_write: Option<(ParameterKind, u8)>,
}

impl CycleReport {
    /// `true` if the step changed nothing
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}
