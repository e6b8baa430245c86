#![forbid(unsafe_code)]

//! Frame clock: the per-frame tick subscription as a scoped resource.
//!
//! The controller acquires one clock at construction and keeps it for its
//! whole lifetime; runs toggle pause/resume rather than re-subscribing.
//! A paused clock means the host may skip delivering ticks entirely.

/// Pause/resume control over a per-frame tick source.
pub trait FrameClock {
    /// Start (or keep) delivering ticks.
    fn resume(&mut self);

    /// Stop delivering ticks. The subscription itself stays alive.
    fn pause(&mut self);

    /// Whether ticks are currently suppressed.
    fn is_paused(&self) -> bool;
}

/// A plain pause flag for hosts that drive their own loop.
///
/// Starts paused; the controller resumes it when a run begins.
#[derive(Debug, Clone)]
pub struct ManualClock {
    paused: bool,
}

impl ManualClock {
    /// Create a paused clock.
    #[must_use]
    pub fn new() -> Self {
        Self { paused: true }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for ManualClock {
    fn resume(&mut self) {
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}
