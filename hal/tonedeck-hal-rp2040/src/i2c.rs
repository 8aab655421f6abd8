//! Blocking I2C bus for the RP2040
//!
//! The tone processor only ever receives short writes, so the bus runs in
//! blocking mode and every transaction completes before the cycle goes on.

use embassy_rp::i2c::{self, AbortReason, Blocking, I2c, Instance};
use tonedeck_hal::{I2cBus, I2cConfig};

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Device did not acknowledge
    Nack,
    /// Arbitration lost
    ArbitrationLost,
    /// Transfer aborted for another reason
    Bus,
    /// Empty or oversized buffer
    InvalidLength,
    /// Address outside the 7-bit range or reserved
    InvalidAddress,
    /// Other error
    Other,
}

impl From<i2c::Error> for I2cBusError {
    fn from(e: i2c::Error) -> Self {
        #[allow(unreachable_patterns)]
        match e {
            i2c::Error::Abort(AbortReason::NoAcknowledge) => I2cBusError::Nack,
            i2c::Error::Abort(AbortReason::ArbitrationLoss) => I2cBusError::ArbitrationLost,
            i2c::Error::Abort(_) => I2cBusError::Bus,
            i2c::Error::InvalidReadBufferLength | i2c::Error::InvalidWriteBufferLength => {
                I2cBusError::InvalidLength
            }
            i2c::Error::AddressOutOfRange(_) | i2c::Error::AddressReserved(_) => {
                I2cBusError::InvalidAddress
            }
            _ => I2cBusError::Other,
        }
    }
}

/// Build the embassy-rp bus configuration
pub fn bus_config(config: I2cConfig) -> i2c::Config {
    let mut c = i2c::Config::default();
    c.frequency = config.frequency;
    c
}

/// Blocking I2C master implementing [`I2cBus`]
pub struct BlockingI2c<'d, T: Instance> {
    i2c: I2c<'d, T, Blocking>,
}

impl<'d, T: Instance> BlockingI2c<'d, T> {
    /// Wrap an already configured bus
    pub fn new(i2c: I2c<'d, T, Blocking>) -> Self {
        Self { i2c }
    }
}

impl<T: Instance> I2cBus for BlockingI2c<'_, T> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError> {
        self.i2c
            .blocking_write(address as u16, data)
            .map_err(I2cBusError::from)
    }
}
