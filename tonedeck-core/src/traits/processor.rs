//! Audio processor trait

/// A volume/tone processor driven by single-byte register writes
///
/// The register byte already carries the register select bits, so a write
/// is self-describing and needs no address beyond the chip's own.
pub trait ToneProcessor {
    /// Error reported by the underlying bus
    type Error;

    /// Bring the chip to the power-on state (input, gains, flat tone, volume)
    fn initialize(&mut self) -> Result<(), Self::Error>;

    /// Send one register byte
    fn write_register(&mut self, byte: u8) -> Result<(), Self::Error>;
}
