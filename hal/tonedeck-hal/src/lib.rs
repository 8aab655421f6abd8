//! Tonedeck Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the tone controller is written
//! against. Chip-specific crates implement them; the drivers and the main
//! cycle only ever see these traits, so the whole control loop can run on
//! the host against recording fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tonedeck-core / tonedeck-drivers       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tonedeck-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ tonedeck-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input (encoder button)
//! - [`i2c::I2cBus`] - I2C write primitive (tone processor)
//! - [`adc::AdcReader`] - Single analog channel (temperature probe)
//!
//! Plus [`quadrature::QuadratureCounter`], the chip-independent half of the
//! rotary encoder.

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod i2c;
pub mod quadrature;

// Re-export key traits at crate root for convenience
pub use adc::AdcReader;
pub use gpio::InputPin;
pub use i2c::{I2cBus, I2cConfig};
pub use quadrature::QuadratureCounter;
