//! Blocking ADC reads
//!
//! Pins GP26..GP29 are ADC0..ADC3. Conversions are 12-bit against the
//! 3.3 V supply, so sensor drivers must scale for that reference.

use embassy_rp::adc::{Adc, Blocking, Channel, Error};
use tonedeck_hal::AdcReader;

/// One ADC channel with its own converter handle, implementing [`AdcReader`]
pub struct AdcInput<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
}

impl<'d> AdcInput<'d> {
    /// Bind a channel to the converter
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl AdcReader for AdcInput<'_> {
    type Error = Error;

    fn read(&mut self) -> Result<u16, Error> {
        self.adc.blocking_read(&mut self.channel)
    }
}
