//! Quadrature decoding
//!
//! A rotary encoder drives two square waves 90 degrees apart. Every valid
//! change of the (A, B) pair is one tick in the direction given by which
//! channel leads. Four ticks make one detent on a typical panel encoder.
//!
//! [`QuadratureCounter`] keeps the running tick count in an atomic, so one
//! task can feed it pin levels on every edge while another reads the count
//! at its own pace.

use portable_atomic::{AtomicI32, AtomicU8, Ordering};

/// Tick delta indexed by `(previous << 2) | current` gray-code state
///
/// Zero for no change and for invalid jumps (both channels at once).
const TRANSITIONS: [i8; 16] = [
    0, 1, -1, 0, //
    -1, 0, 0, 1, //
    1, 0, 0, -1, //
    0, -1, 1, 0, //
];

/// Pack channel levels into a 2-bit gray-code state
const fn encode(a: bool, b: bool) -> u8 {
    ((a as u8) << 1) | b as u8
}

/// Lock-free accumulating quadrature tick counter
pub struct QuadratureCounter {
    count: AtomicI32,
    state: AtomicU8,
}

impl Default for QuadratureCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadratureCounter {
    /// Counter at zero with both channels assumed low
    pub const fn new() -> Self {
        Self {
            count: AtomicI32::new(0),
            state: AtomicU8::new(0),
        }
    }

    /// Set the reference levels without counting
    ///
    /// Call once with the pin levels read at startup.
    pub fn prime(&self, a: bool, b: bool) {
        self.state.store(encode(a, b), Ordering::Relaxed);
    }

    /// Feed the current channel levels; returns the tick delta applied
    pub fn update(&self, a: bool, b: bool) -> i8 {
        let current = encode(a, b);
        let previous = self.state.swap(current, Ordering::Relaxed);
        let delta = TRANSITIONS[((previous << 2) | current) as usize];
        if delta != 0 {
            self.count.fetch_add(delta as i32, Ordering::Relaxed);
        }
        delta
    }

    /// Accumulated ticks since creation
    pub fn count(&self) -> i32 {
        self.count.load(Ordering::Relaxed)
    }
}
