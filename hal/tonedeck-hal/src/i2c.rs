//! I2C bus abstractions
//!
//! The tone processor is write-only, so the bus contract is a single
//! write transaction. Acknowledge failures surface as `Self::Error` and it
//! is up to the caller whether anything is done about them.

/// I2C bus master
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address as one transaction
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, data)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingBus {
        writes: usize,
        last_address: u8,
    }

    impl I2cBus for CountingBus {
        type Error = ();

        fn write(&mut self, address: u8, _data: &[u8]) -> Result<(), ()> {
            self.writes += 1;
            self.last_address = address;
            Ok(())
        }
    }

    #[test]
    fn test_default_is_standard_mode() {
        assert_eq!(I2cConfig::default().frequency, 100_000);
        assert_eq!(I2cConfig::FAST.frequency, 400_000);
    }

    #[test]
    fn test_mut_ref_forwards_writes() {
        let mut bus = CountingBus {
            writes: 0,
            last_address: 0,
        };
        fn send<B: I2cBus>(mut bus: B) -> Result<(), B::Error> {
            bus.write(0x44, &[0x20])
        }

        send(&mut bus).unwrap();
        assert_eq!(bus.writes, 1);
        assert_eq!(bus.last_address, 0x44);
    }
}
