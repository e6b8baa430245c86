#![forbid(unsafe_code)]

//! Fade configuration.

use std::time::Duration;

use dissolve_core::easing::{EasingFn, linear};

/// Caller-set knobs read by the fade controller.
///
/// Zero durations are tolerated: runs clamp their span to a 1 ns epsilon
/// and complete within one tick.
#[derive(Debug, Clone, Copy)]
pub struct FadeConfig {
    /// Nominal fade-in span. Also the randomization bound for the
    /// per-character schedules in both directions.
    pub fade_in_duration: Duration,
    /// Nominal fade-out span.
    pub fade_out_duration: Duration,
    /// Start fading in automatically when the host attaches the label.
    pub auto_start: bool,
    /// Easing applied to each character's transition.
    pub easing: EasingFn,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            fade_in_duration: Duration::from_secs(1),
            fade_out_duration: Duration::from_secs(1),
            auto_start: false,
            easing: linear,
        }
    }
}

impl FadeConfig {
    /// Set the fade-in span (builder).
    #[must_use]
    pub fn fade_in_duration(mut self, duration: Duration) -> Self {
        self.fade_in_duration = duration;
        self
    }

    /// Set the fade-out span (builder).
    #[must_use]
    pub fn fade_out_duration(mut self, duration: Duration) -> Self {
        self.fade_out_duration = duration;
        self
    }

    /// Enable or disable auto-start on attach (builder).
    #[must_use]
    pub fn auto_start(mut self, on: bool) -> Self {
        self.auto_start = on;
        self
    }

    /// Set the easing function (builder).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }
}
