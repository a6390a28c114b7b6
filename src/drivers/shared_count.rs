// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Encoder count shared with an interrupt handler.
//!
//! When the quadrature signals are decoded in an EXTI handler instead of a timer in encoder mode,
//! the handler and the polling loop share one word. `AtomicCount` keeps that word in an
//! `AtomicI32` so the loop's read can never observe a torn update.
//!
//! ```ignore
//! static COUNT: AtomicCount = AtomicCount::new();
//!
//! // EXTI handler
//! COUNT.step(a_is_high, b_is_high);
//!
//! // Polling loop
//! let mut actuator = AxialActuator::new(config, driver, &COUNT, switches)?;
//! ```

use core::sync::atomic::{AtomicI32, AtomicU8, Ordering};

use crate::drivers::port::EncoderSource;

/// Count change for each (previous AB, current AB) pair, indexed by `prev << 2 | curr`.
/// Invalid double transitions count as zero.
const QUADRATURE_TABLE: [i8; 16] = [0, 1, -1, 0, -1, 0, 0, 1, 1, 0, 0, -1, 0, -1, 1, 0];

pub struct AtomicCount {
    count: AtomicI32,
    last_ab: AtomicU8,
}

impl AtomicCount {
    pub const fn new() -> Self {
        Self {
            count: AtomicI32::new(0),
            last_ab: AtomicU8::new(0),
        }
    }

    /// Current count.
    #[inline]
    pub fn get(&self) -> i32 {
        self.count.load(Ordering::Acquire)
    }

    /// Overwrite the count.
    #[inline]
    pub fn set(&self, value: i32) {
        self.count.store(value, Ordering::Release);
    }

    /// Add a signed number of clicks.
    #[inline]
    pub fn add(&self, delta: i32) {
        self.count.fetch_add(delta, Ordering::AcqRel);
    }

    /// Decode one sample of the A/B lines (4x decoding). Call from the edge interrupt of either
    /// line.
    pub fn step(&self, a: bool, b: bool) {
        let curr = ((a as u8) << 1) | b as u8;
        let prev = self.last_ab.swap(curr, Ordering::AcqRel);
        let delta = QUADRATURE_TABLE[((prev << 2) | curr) as usize];
        if delta != 0 {
            self.add(delta as i32);
        }
    }
}

impl Default for AtomicCount {
    fn default() -> Self {
        Self::new()
    }
}

impl EncoderSource for &AtomicCount {
    #[inline]
    fn read(&mut self) -> i32 {
        self.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_cycle_counts_four() {
        let c = AtomicCount::new();
        // 00 -> 01 -> 11 -> 10 -> 00
        for (a, b) in [(false, true), (true, true), (true, false), (false, false)] {
            c.step(a, b);
        }
        assert_eq!(c.get(), 4);
    }

    #[test]
    fn reverse_cycle_counts_minus_four() {
        let c = AtomicCount::new();
        for (a, b) in [(true, false), (true, true), (false, true), (false, false)] {
            c.step(a, b);
        }
        assert_eq!(c.get(), -4);
    }

    #[test]
    fn repeated_sample_does_not_count() {
        let c = AtomicCount::new();
        c.step(false, true);
        c.step(false, true);
        assert_eq!(c.get(), 1);
    }

    #[test]
    fn reads_through_encoder_source() {
        let c = AtomicCount::new();
        c.set(-42);
        let mut src = &c;
        assert_eq!(src.read(), -42);
    }
}
