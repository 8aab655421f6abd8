//! Temperature sensor drivers

pub mod lm35;

pub use lm35::Lm35;
