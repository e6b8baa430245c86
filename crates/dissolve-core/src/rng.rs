#![forbid(unsafe_code)]

//! Uniform random source for schedule generation.
//!
//! Schedules draw two uniform samples per character. The source is a
//! trait so tests can inject a seeded generator and get byte-identical
//! schedules on every run.
//!
//! # Invariants
//!
//! 1. [`UniformSource::next_f64`] returns values in [0.0, 1.0).
//! 2. [`Xorshift64`] is fully determined by its seed.
//! 3. [`UniformSource::uniform_duration`] never returns more than `bound`.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A stream of uniform samples in [0.0, 1.0).
pub trait UniformSource {
    /// Next sample, uniform in [0.0, 1.0).
    fn next_f64(&mut self) -> f64;

    /// A uniform duration in `[0, bound)`.
    ///
    /// Returns [`Duration::ZERO`] when `bound` is zero.
    fn uniform_duration(&mut self, bound: Duration) -> Duration {
        if bound.is_zero() {
            return Duration::ZERO;
        }
        let nanos = (bound.as_nanos() as f64 * self.next_f64()) as u64;
        Duration::from_nanos(nanos)
    }
}

/// Simple xorshift64 PRNG, deterministic for a given seed.
///
/// Not cryptographic; statistical quality is more than enough for visual
/// jitter.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Create a generator from a seed. Any seed value is valid.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        // Avoid the all-zero state, which xorshift never leaves.
        let state = seed.wrapping_add(1).max(1);
        Self { state }
    }

    /// Create a generator seeded from the system clock.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0x9E37_79B9_7F4A_7C15, |d| d.subsec_nanos() as u64 ^ d.as_secs());
        Self::new(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // xorshift64
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl UniformSource for Xorshift64 {
    fn next_f64(&mut self) -> f64 {
        // Use the top 53 bits so the result fits a double's mantissa exactly.
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}
