//! Encoder edge tracking task

use defmt::*;
use embassy_rp::gpio::Input;
use tonedeck_hal::QuadratureCounter;
use tonedeck_hal_rp2040::encoder::track_quadrature;

/// Tick count shared with the control cycle
pub static ENCODER_COUNT: QuadratureCounter = QuadratureCounter::new();

/// Follow both encoder channels and accumulate into [`ENCODER_COUNT`]
#[embassy_executor::task]
pub async fn encoder_task(a: Input<'static>, b: Input<'static>) {
    info!("Encoder task started");
    track_quadrature(a, b, &ENCODER_COUNT).await
}
