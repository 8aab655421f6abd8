use super::{Direction, ParameterKind};
use crate::codec;

/// One audio parameter with its register encoding and change flags
///
/// The position and the register byte only ever change together, inside
/// [`apply`](Self::apply), so a reader never sees one without the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Parameter {
    kind: ParameterKind,
    /// Logical position in centi-dB, always on the step grid within limits
    centi_db: i16,
    /// TDA7313 register byte for `centi_db`
    register_byte: u8,
    /// Front panel graph needs a redraw
    dirty: bool,
    /// Register byte not yet transmitted
    pending_write: bool,
}

impl Parameter {
    /// Parameter in its power-on state, no flags set
    pub const fn new(kind: ParameterKind) -> Self {
        let limits = kind.limits();
        Self {
            kind,
            centi_db: limits.default_centi_db,
            register_byte: limits.default_byte,
            dirty: false,
            pending_write: false,
        }
    }

    /// Move one step in `direction`
    ///
    /// At the range limit this is a silent no-op: nothing changes and no
    /// flag is set. Returns `true` if the position moved.
    pub fn apply(&mut self, direction: Direction) -> bool {
        let limits = self.kind.limits();
        let next = match direction {
            Direction::Increase => self.centi_db + limits.step_centi_db,
            Direction::Decrease => self.centi_db - limits.step_centi_db,
        };
        if next > limits.max_centi_db || next < limits.min_centi_db {
            return false;
        }

        self.register_byte =
            codec::next_register_byte(self.kind, self.register_byte, self.centi_db, direction);
        self.centi_db = next;
        self.dirty = true;
        self.pending_write = true;
        true
    }

    /// Which parameter this is
    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// Position in centi-dB
    pub fn centi_db(&self) -> i16 {
        self.centi_db
    }

    /// Position in dB
    pub fn db(&self) -> f32 {
        self.centi_db as f32 / 100.0
    }

    /// Current register byte
    pub fn register_byte(&self) -> u8 {
        self.register_byte
    }

    /// Graph needs a redraw
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Register byte still to be sent
    pub fn is_pending(&self) -> bool {
        self.pending_write
    }

    /// Flag the graph for redraw without changing the value
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Queue the current register byte for transmission again
    pub fn mark_pending(&mut self) {
        self.pending_write = true;
    }

    /// Clear the redraw flag; returns whether it was set
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }

    /// Clear the pending flag and return the byte to send, if any
    pub fn take_pending(&mut self) -> Option<u8> {
        if core::mem::replace(&mut self.pending_write, false) {
            Some(self.register_byte)
        } else {
            None
        }
    }
}
