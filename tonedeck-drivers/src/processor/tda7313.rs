//! TDA7313 digital audio processor
//!
//! Every register write is a single I2C transaction to the chip's fixed
//! address. The chip auto-increments through the data bytes, so the
//! power-on configuration goes out as one transaction.

use tonedeck_core::traits::ToneProcessor;
use tonedeck_hal::I2cBus;

/// 7-bit I2C address (`0b100_0100`)
pub const TDA7313_ADDRESS: u8 = 0x44;

/// Power-on register configuration
///
/// | Byte | Register |
/// |------|----------|
/// | `0x45` | input select: input 2, 11.25 dB gain, loudness off |
/// | `0x6F` | bass flat |
/// | `0x7F` | treble flat |
/// | `0x9F` | speaker attenuator LF |
/// | `0xBF` | speaker attenuator RF |
/// | `0xC0` | speaker attenuator LR, 0 dB |
/// | `0xE0` | speaker attenuator RR, 0 dB |
/// | `0x16` | volume |
pub const INIT_SEQUENCE: [u8; 8] = [0x45, 0x6F, 0x7F, 0x9F, 0xBF, 0xC0, 0xE0, 0x16];

/// TDA7313 on an I2C bus
pub struct Tda7313<B> {
    bus: B,
}

impl<B: I2cBus> Tda7313<B> {
    /// Create a driver; nothing is sent until [`ToneProcessor::initialize`]
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: I2cBus> ToneProcessor for Tda7313<B> {
    type Error = B::Error;

    fn initialize(&mut self) -> Result<(), B::Error> {
        self.bus.write(TDA7313_ADDRESS, &INIT_SEQUENCE)
    }

    fn write_register(&mut self, byte: u8) -> Result<(), B::Error> {
        self.bus.write(TDA7313_ADDRESS, &[byte])
    }
}
