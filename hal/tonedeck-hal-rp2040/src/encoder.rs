//! Rotary encoder edge tracking
//!
//! Waits on either encoder channel and feeds every edge into a shared
//! [`QuadratureCounter`]. Run it in its own task; the main cycle only
//! reads the count.

use embassy_futures::select::select;
use embassy_rp::gpio::Input;
use tonedeck_hal::QuadratureCounter;

/// Track both encoder channels forever
pub async fn track_quadrature(
    mut a: Input<'_>,
    mut b: Input<'_>,
    counter: &QuadratureCounter,
) -> ! {
    counter.prime(a.is_high(), b.is_high());

    loop {
        select(a.wait_for_any_edge(), b.wait_for_any_edge()).await;
        counter.update(a.is_high(), b.is_high());
    }
}
