#![forbid(unsafe_code)]

//! Per-character fade schedules.
//!
//! Every eligible character gets its own randomized delay and transition
//! span, drawn once when the text is set. The sum of the two need not
//! equal the run's nominal duration: characters finishing early or
//! straddling the nominal end is the intended staggered look. Display
//! alpha is clamped downstream regardless.
//!
//! # Invariants
//!
//! 1. `delay < bound / 2` (up to rounding).
//! 2. `delay + duration <= bound`.
//! 3. Whitespace characters never receive a schedule.

use std::time::Duration;

use crate::rng::UniformSource;

/// Randomized timing for one character: wait `delay`, then transition
/// over `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharSchedule {
    /// Offset from the run's begin time before the character starts
    /// changing alpha.
    pub delay: Duration,
    /// Span over which the character transitions once its delay elapses.
    /// May be zero: the character then snaps to the target the moment its
    /// delay elapses.
    pub duration: Duration,
}

impl CharSchedule {
    /// Draw a schedule from `rng`: delay uniform in `[0, bound/2)`,
    /// duration uniform in `[0, bound - delay)`.
    pub fn draw(bound: Duration, rng: &mut dyn UniformSource) -> Self {
        let delay = rng.uniform_duration(bound / 2);
        let duration = rng.uniform_duration(bound.saturating_sub(delay));
        Self { delay, duration }
    }
}
