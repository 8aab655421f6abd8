//! Digital inputs

use embassy_rp::gpio::Input;
use tonedeck_hal::InputPin;

/// GPIO input implementing [`InputPin`]
pub struct GpioInput<'d> {
    pin: Input<'d>,
}

impl<'d> GpioInput<'d> {
    /// Wrap a configured input (pull already set)
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl InputPin for GpioInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
