#![forbid(unsafe_code)]

//! Fade controller: the state machine driving one fade run at a time.
//!
//! Owns the styled buffer, the current timeline, and the frame clock.
//! The host delivers [`FadeController::on_frame_tick`] with a monotonic
//! timestamp while the clock is unpaused; the returned [`Tick`] is the
//! redraw signal.
//!
//! # Invariants
//!
//! 1. At most one run is active; conflicting `fade_in`/`fade_out` calls
//!    are silent no-ops, never errors.
//! 2. The completion callback fires at most once, on the tick path.
//! 3. The clock is resumed exactly when a run starts and paused exactly
//!    when it finishes; the run always terminates once `now` passes its
//!    nominal end (empty text terminates on the first tick).
//! 4. Whitespace graphemes never receive an alpha write.
//!
//! # Failure Modes
//!
//! - `fade_in` while fading or already visible: no-op, any supplied
//!   callback is dropped.
//! - `fade_out` while fading or already faded out: likewise.
//! - Zero configured durations: the run spans 1 ns and finishes on the
//!   next tick.

use std::time::Duration;

use tracing::debug;

use dissolve_core::rng::{UniformSource, Xorshift64};
use dissolve_core::timeline::{FadeDirection, FadeRun, FadeTimeline};

use crate::clock::FrameClock;
use crate::config::FadeConfig;
use crate::styled::StyledText;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// What the host should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Tick {
    /// No run is active; nothing changed.
    Idle,
    /// Alphas changed; repaint the label.
    Redraw,
    /// The run just completed: repaint, and the clock is now paused.
    Finished,
}

/// Single-run-at-a-time state machine.
#[derive(Debug, Clone, Copy)]
enum RunState {
    Idle,
    Running(FadeRun),
}

/// Drives per-character fades over a [`StyledText`] buffer.
pub struct FadeController<C: FrameClock> {
    config: FadeConfig,
    clock: C,
    rng: Box<dyn UniformSource>,
    styled: StyledText,
    timeline: FadeTimeline,
    state: RunState,
    is_faded_out: bool,
    completion: Option<Box<dyn FnOnce()>>,
}

impl<C: FrameClock + std::fmt::Debug> std::fmt::Debug for FadeController<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FadeController")
            .field("clock", &self.clock)
            .field("state", &self.state)
            .field("is_faded_out", &self.is_faded_out)
            .field("graphemes", &self.styled.len())
            .field("has_completion", &self.completion.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl<C: FrameClock> FadeController<C> {
    /// Create a controller with an entropy-seeded schedule generator.
    ///
    /// The label starts faded out with empty text; the clock is paused.
    #[must_use]
    pub fn new(config: FadeConfig, clock: C) -> Self {
        Self::with_rng(config, clock, Box::new(Xorshift64::from_entropy()))
    }

    /// Create a controller with an injected random source.
    ///
    /// Seed the source to make schedules deterministic.
    #[must_use]
    pub fn with_rng(config: FadeConfig, mut clock: C, rng: Box<dyn UniformSource>) -> Self {
        clock.pause();
        Self {
            config,
            clock,
            rng,
            styled: StyledText::new(""),
            timeline: FadeTimeline::empty(),
            state: RunState::Idle,
            is_faded_out: true,
            completion: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Public operations
// ---------------------------------------------------------------------------

impl<C: FrameClock> FadeController<C> {
    /// Replace the text: rebuilds the styled buffer (every alpha back to
    /// 0, whatever the visibility state) and draws fresh schedules using
    /// the current fade-in duration as the randomization bound.
    ///
    /// Schedules for an in-progress run are invalidated from the next
    /// tick on.
    pub fn set_text(&mut self, text: &str) {
        self.styled = StyledText::new(text);
        let eligible = self.styled.eligibility();
        self.timeline =
            FadeTimeline::generate(&eligible, self.config.fade_in_duration, self.rng.as_mut())
                .easing(self.config.easing);
    }

    /// Start fading in at `now`. No-op unless idle and faded out.
    pub fn fade_in(&mut self, now: Duration) {
        self.start(FadeDirection::In, now, None);
    }

    /// Start fading in with a completion callback, fired at most once.
    pub fn fade_in_with(&mut self, now: Duration, on_complete: impl FnOnce() + 'static) {
        self.start(FadeDirection::In, now, Some(Box::new(on_complete)));
    }

    /// Start fading out at `now`. No-op unless idle and visible.
    pub fn fade_out(&mut self, now: Duration) {
        self.start(FadeDirection::Out, now, None);
    }

    /// Start fading out with a completion callback, fired at most once.
    pub fn fade_out_with(&mut self, now: Duration, on_complete: impl FnOnce() + 'static) {
        self.start(FadeDirection::Out, now, Some(Box::new(on_complete)));
    }

    /// Host lifecycle hook: call when the label becomes visible/attached.
    /// Triggers a fade-in when `auto_start` is configured.
    pub fn attached(&mut self, now: Duration) {
        if self.config.auto_start {
            self.fade_in(now);
        }
    }

    /// Advance the active run to `now`.
    ///
    /// Writes the current alpha for every scheduled grapheme, then checks
    /// termination. On termination the clock pauses, the run is cleared,
    /// and the completion callback fires.
    pub fn on_frame_tick(&mut self, now: Duration) -> Tick {
        let RunState::Running(run) = self.state else {
            return Tick::Idle;
        };

        for index in 0..self.styled.len() {
            if let Some(alpha) = self.timeline.alpha_at(now, &run, index) {
                self.styled.set_alpha(index, alpha);
            }
        }

        if self.styled.is_empty() || run.is_finished(now) {
            self.state = RunState::Idle;
            self.clock.pause();
            debug!(direction = ?run.direction(), end = ?run.end(), "fade run finished");
            if let Some(on_complete) = self.completion.take() {
                on_complete();
            }
            Tick::Finished
        } else {
            Tick::Redraw
        }
    }
}

// ---------------------------------------------------------------------------
// Observers
// ---------------------------------------------------------------------------

impl<C: FrameClock> FadeController<C> {
    /// Whether a run is currently active.
    #[must_use]
    pub fn is_fading(&self) -> bool {
        matches!(self.state, RunState::Running(_))
    }

    /// Current logical visibility state. Starts `true`.
    #[must_use]
    pub fn is_faded_out(&self) -> bool {
        self.is_faded_out
    }

    /// Inverse of [`is_faded_out`](Self::is_faded_out).
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.is_faded_out
    }

    /// The styled buffer the engine mutates per frame.
    #[must_use]
    pub fn styled(&self) -> &StyledText {
        &self.styled
    }

    /// The configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> &FadeConfig {
        &self.config
    }

    /// The frame clock. Paused whenever no run is active.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

impl<C: FrameClock> FadeController<C> {
    fn start(
        &mut self,
        direction: FadeDirection,
        now: Duration,
        completion: Option<Box<dyn FnOnce()>>,
    ) {
        if self.is_fading() {
            return;
        }
        let allowed = match direction {
            FadeDirection::In => self.is_faded_out,
            FadeDirection::Out => !self.is_faded_out,
        };
        if !allowed {
            return;
        }

        self.is_faded_out = matches!(direction, FadeDirection::Out);
        let nominal = match direction {
            FadeDirection::In => self.config.fade_in_duration,
            FadeDirection::Out => self.config.fade_out_duration,
        };
        let run = FadeRun::new(direction, now, nominal);
        debug!(
            ?direction,
            begin = ?run.begin(),
            end = ?run.end(),
            graphemes = self.styled.len(),
            "fade run started"
        );
        self.completion = completion;
        self.state = RunState::Running(run);
        self.clock.resume();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
