//! Character display drivers

pub mod oled4bit;

pub use oled4bit::Oled4Bit;
