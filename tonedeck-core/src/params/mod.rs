//! Parameter model
//!
//! Three parameters (volume, treble, bass) each hold a logical position in
//! centi-dB and the TDA7313 register byte for it. Positions move one step
//! per encoder detent and saturate silently at the range limits.
//!
//! # Change Tracking
//!
//! Each parameter carries two independent flags:
//!
//! - **`dirty`** - the front panel needs to redraw this parameter's graph.
//!   Cleared by the renderer.
//! - **`pending_write`** - the register byte has not reached the chip yet.
//!   Cleared when the main cycle transmits it.

mod parameter;
mod set;

pub use parameter::Parameter;
pub use set::ParameterSet;

use crate::config::{Limits, BASS_LIMITS, TREBLE_LIMITS, VOLUME_LIMITS};

/// Which audio parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParameterKind {
    /// Master volume (attenuation)
    Volume,
    /// Treble boost/cut
    Treble,
    /// Bass boost/cut
    Bass,
}

impl ParameterKind {
    /// All parameters, in display and transmit priority order
    pub const ALL: [ParameterKind; 3] = [
        ParameterKind::Volume,
        ParameterKind::Treble,
        ParameterKind::Bass,
    ];

    /// Range and power-on state
    pub const fn limits(self) -> Limits {
        match self {
            ParameterKind::Volume => VOLUME_LIMITS,
            ParameterKind::Treble => TREBLE_LIMITS,
            ParameterKind::Bass => BASS_LIMITS,
        }
    }

    /// Next parameter in selection order, wrapping Bass to Volume
    pub const fn next(self) -> Self {
        match self {
            ParameterKind::Volume => ParameterKind::Treble,
            ParameterKind::Treble => ParameterKind::Bass,
            ParameterKind::Bass => ParameterKind::Volume,
        }
    }

    /// Index into per-parameter arrays
    pub const fn index(self) -> usize {
        match self {
            ParameterKind::Volume => 0,
            ParameterKind::Treble => 1,
            ParameterKind::Bass => 2,
        }
    }

    /// Display row holding this parameter's label and graph
    pub const fn row(self) -> u8 {
        self.index() as u8
    }

    /// Three-letter panel label
    pub const fn label(self) -> &'static str {
        match self {
            ParameterKind::Volume => "VOL",
            ParameterKind::Treble => "TRB",
            ParameterKind::Bass => "BAS",
        }
    }
}

/// Direction of one encoder detent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise: louder, more boost
    Increase,
    /// Counter-clockwise: quieter, more cut
    Decrease,
}

/// Selection cursor: which parameter the encoder adjusts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selection {
    current: ParameterKind,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl Selection {
    /// Cursor on volume, as at power-on
    pub const fn new() -> Self {
        Self {
            current: ParameterKind::Volume,
        }
    }

    /// Currently selected parameter
    pub const fn current(&self) -> ParameterKind {
        self.current
    }

    /// Advance to the next parameter and return it
    pub fn cycle(&mut self) -> ParameterKind {
        self.current = self.current.next();
        self.current
    }
}
