//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in tonedeck-core for the tone controller's hardware:
//!
//! - Tone processor (TDA7313 over I2C)
//! - Temperature sensor (LM35 on an ADC channel)
//! - Front panel inputs (push button, quadrature encoder count)
//! - Character display (HD44780-compatible OLED, 4-bit parallel)

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod input;
pub mod processor;
pub mod sensor;
