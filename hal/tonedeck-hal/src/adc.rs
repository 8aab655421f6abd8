//! Analog input abstractions

/// A single analog input channel
///
/// Returns the raw conversion result. Scaling to physical units is the
/// sensor driver's job, since it depends on the reference voltage in use.
pub trait AdcReader {
    /// Error type for conversions
    type Error;

    /// Take one conversion and return the raw count
    fn read(&mut self) -> Result<u16, Self::Error>;
}
