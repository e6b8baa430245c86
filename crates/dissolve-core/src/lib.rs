#![forbid(unsafe_code)]

//! Core: pure per-character fade timeline computation.
//!
//! Everything here is deterministic math with no I/O and no terminal
//! dependency. [`timeline::FadeTimeline`] maps `(now, run, index)` to an
//! alpha in [0.0, 1.0]; [`schedule`] draws the randomized per-character
//! delays and durations; [`rng`] supplies the seedable uniform source.

pub mod easing;
pub mod rng;
pub mod schedule;
pub mod timeline;

pub use easing::{EasingFn, ease_in, ease_in_out, ease_out, linear};
pub use rng::{UniformSource, Xorshift64};
pub use schedule::CharSchedule;
pub use timeline::{FadeDirection, FadeRun, FadeTimeline};
