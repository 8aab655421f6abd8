use super::parameter::Parameter;
use super::{Direction, ParameterKind};

/// The three audio parameters
///
/// Owned by the main cycle. Encoder intents go in through
/// [`apply_delta`](Self::apply_delta); the register writer drains
/// [`take_pending_write`](Self::take_pending_write) and the renderer drains
/// [`take_first_dirty`](Self::take_first_dirty).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParameterSet {
    params: [Parameter; 3],
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterSet {
    /// All parameters at their power-on values
    pub const fn new() -> Self {
        Self {
            params: [
                Parameter::new(ParameterKind::Volume),
                Parameter::new(ParameterKind::Treble),
                Parameter::new(ParameterKind::Bass),
            ],
        }
    }

    /// Read one parameter
    pub fn get(&self, kind: ParameterKind) -> &Parameter {
        &self.params[kind.index()]
    }

    /// Move one parameter one step; `false` if it was already at its limit
    ///
    /// # Examples
    ///
    /// ```
    /// use tonedeck_core::params::{Direction, ParameterKind, ParameterSet};
    ///
    /// let mut params = ParameterSet::new();
    /// assert!(params.apply_delta(ParameterKind::Treble, Direction::Increase));
    /// assert_eq!(params.get(ParameterKind::Treble).centi_db(), 200);
    /// assert_eq!(params.get(ParameterKind::Treble).register_byte(), 126);
    /// ```
    pub fn apply_delta(&mut self, kind: ParameterKind, direction: Direction) -> bool {
        let moved = self.params[kind.index()].apply(direction);

        #[cfg(feature = "defmt")]
        {
            let p = &self.params[kind.index()];
            if moved {
                defmt::debug!(
                    "{} -> {} cdB (byte {=u8:#04x})",
                    kind,
                    p.centi_db(),
                    p.register_byte()
                );
            } else {
                defmt::trace!("{} saturated", kind);
            }
        }

        moved
    }

    /// Flag a parameter's graph for redraw
    pub fn mark_dirty(&mut self, kind: ParameterKind) {
        self.params[kind.index()].mark_dirty();
    }

    /// Queue a parameter's register byte without changing its value
    pub fn mark_pending(&mut self, kind: ParameterKind) {
        self.params[kind.index()].mark_pending();
    }

    /// Next register byte to transmit, in priority order Volume, Treble, Bass
    ///
    /// Only one byte is handed out per call; the pending flag of that
    /// parameter is cleared, the others keep theirs.
    pub fn take_pending_write(&mut self) -> Option<(ParameterKind, u8)> {
        self.params
            .iter_mut()
            .find_map(|p| p.take_pending().map(|byte| (p.kind(), byte)))
    }

    /// First parameter needing a graph redraw, in the same priority order
    ///
    /// Clears that parameter's dirty flag only.
    pub fn take_first_dirty(&mut self) -> Option<&Parameter> {
        let idx = self.params.iter().position(|p| p.is_dirty())?;
        self.params[idx].take_dirty();
        Some(&self.params[idx])
    }

    /// Iterate over all parameters in priority order
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter()
    }
}
