//! Front panel input drivers

pub mod button;
pub mod encoder;

pub use button::PinButton;
pub use encoder::CountingEncoder;
