//! RP2040-specific HAL for the tone controller firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `tonedeck-hal` traits on top of `embassy-rp`:
//!
//! - Blocking I2C write primitive (tone processor)
//! - Digital input (encoder push button)
//! - Single-channel blocking ADC (temperature probe)
//! - Edge-driven quadrature tracking (rotary encoder)

#![no_std]

pub mod adc;
pub mod encoder;
pub mod gpio;
pub mod i2c;

// Re-export shared traits from tonedeck-hal for convenience
pub use tonedeck_hal::{AdcReader, I2cBus, InputPin, QuadratureCounter};
