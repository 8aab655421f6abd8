//! GPIO push button

use tonedeck_core::traits::PushButton;
use tonedeck_hal::InputPin;

/// Push button read from a single GPIO
///
/// The pin can be wired active-high (pressed = high, with a pull-down)
/// or active-low (pressed = low, with a pull-up).
pub struct PinButton<P> {
    pin: P,
    /// If true, pressed = pin LOW
    active_low: bool,
}

impl<P: InputPin> PinButton<P> {
    /// Create a new button
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Button that reads high while pressed
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Button that reads low while pressed
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: InputPin> PushButton for PinButton<P> {
    fn is_pressed(&mut self) -> bool {
        self.pin.is_high() != self.active_low
    }
}
