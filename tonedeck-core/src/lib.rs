//! Board-agnostic core logic for the tone controller firmware
//!
//! This crate contains everything between the knob and the audio chip
//! that does not depend on specific hardware:
//!
//! - Parameter model (volume, treble, bass) with range limits
//! - TDA7313 register encoding for each parameter
//! - Input sampling (encoder detents, button press/release cycle)
//! - Rolling temperature average
//! - Front panel rendering
//! - The main cycle tying it all together
//! - Capability traits the main cycle drives

#![no_std]
#![deny(unsafe_code)]

pub mod codec;
pub mod config;
pub mod cycle;
pub mod input;
pub mod params;
pub mod render;
pub mod thermal;
pub mod traits;
