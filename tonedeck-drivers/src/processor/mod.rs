//! Audio processor drivers

pub mod tda7313;

pub use tda7313::Tda7313;
