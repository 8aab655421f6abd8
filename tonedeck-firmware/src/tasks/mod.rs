//! Embassy async tasks
//!
//! The control cycle runs on the main task; only encoder edge tracking
//! runs beside it.

pub mod encoder;

pub use encoder::{encoder_task, ENCODER_COUNT};
