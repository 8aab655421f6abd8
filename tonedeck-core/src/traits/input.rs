//! Front panel input traits

/// Quadrature encoder exposing an accumulating tick counter
///
/// The counter is never reset; consumers work with deltas.
pub trait RotaryEncoder {
    /// Current accumulated tick count
    fn ticks(&mut self) -> i32;
}

/// Momentary push button
pub trait PushButton {
    /// `true` while the button is held down
    fn is_pressed(&mut self) -> bool;
}
