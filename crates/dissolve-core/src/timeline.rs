#![forbid(unsafe_code)]

//! Fade timeline: pure mapping from time to per-character alpha.
//!
//! A [`FadeTimeline`] holds one optional [`CharSchedule`] per character
//! slot (whitespace slots are `None`) and an easing function. Given a
//! [`FadeRun`] and the current monotonic timestamp, [`FadeTimeline::alpha_at`]
//! produces the character's alpha. No state is mutated per frame; the
//! driver just re-asks at each tick.
//!
//! # Invariants
//!
//! 1. `alpha_at` output is always in [0.0, 1.0].
//! 2. Before a character's delay elapses it holds the boundary value:
//!    0 when fading in, 1 when fading out.
//! 3. A zero-duration schedule snaps to the target the moment its delay
//!    elapses (no division by zero).
//! 4. Whitespace slots and out-of-range indices yield `None` — their
//!    alpha is never touched.
//!
//! # Failure Modes
//!
//! - Zero nominal run duration: clamped to 1 ns so the run still makes
//!   forward progress and terminates within one tick.
//! - `now` before `begin`: treated as zero elapsed time.

use std::time::Duration;

use crate::easing::{EasingFn, linear};
use crate::rng::UniformSource;
use crate::schedule::CharSchedule;

// ---------------------------------------------------------------------------
// Direction and run
// ---------------------------------------------------------------------------

/// Which way a run moves the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    /// Transparent to opaque.
    In,
    /// Opaque to transparent.
    Out,
}

impl FadeDirection {
    /// Alpha a character holds before its delay elapses.
    #[must_use]
    pub fn boundary_alpha(self) -> f32 {
        match self {
            FadeDirection::In => 0.0,
            FadeDirection::Out => 1.0,
        }
    }
}

/// One active fade invocation: direction plus begin/end timestamps.
#[derive(Debug, Clone, Copy)]
pub struct FadeRun {
    direction: FadeDirection,
    begin: Duration,
    end: Duration,
}

impl FadeRun {
    /// Create a run starting at `begin` with the given nominal span.
    ///
    /// A zero span is clamped to 1 ns to guarantee termination.
    #[must_use]
    pub fn new(direction: FadeDirection, begin: Duration, nominal: Duration) -> Self {
        let nominal = if nominal.is_zero() {
            Duration::from_nanos(1)
        } else {
            nominal
        };
        Self {
            direction,
            begin,
            end: begin.saturating_add(nominal),
        }
    }

    /// Direction of this run.
    #[must_use]
    pub fn direction(&self) -> FadeDirection {
        self.direction
    }

    /// Timestamp the run started at.
    #[must_use]
    pub fn begin(&self) -> Duration {
        self.begin
    }

    /// Timestamp the run nominally ends at.
    #[must_use]
    pub fn end(&self) -> Duration {
        self.end
    }

    /// Whether the run has passed its nominal end.
    #[must_use]
    pub fn is_finished(&self, now: Duration) -> bool {
        now > self.end
    }
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

/// Per-character schedules plus the easing applied to each transition.
#[derive(Debug, Clone)]
pub struct FadeTimeline {
    slots: Vec<Option<CharSchedule>>,
    easing: EasingFn,
}

impl FadeTimeline {
    /// A timeline with no characters. Any run over it is a no-op.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            slots: Vec::new(),
            easing: linear,
        }
    }

    /// Draw one schedule per eligible slot from `rng`.
    ///
    /// `eligible[i]` is false for whitespace characters; those slots stay
    /// unscheduled. `bound` is the randomization bound (the caller's
    /// fade-in duration), already clamped by the caller if configured as
    /// zero.
    #[must_use]
    pub fn generate(eligible: &[bool], bound: Duration, rng: &mut dyn UniformSource) -> Self {
        let slots = eligible
            .iter()
            .map(|&on| on.then(|| CharSchedule::draw(bound, rng)))
            .collect();
        Self {
            slots,
            easing: linear,
        }
    }

    /// Set the easing function applied to each character's transition.
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Number of character slots (scheduled or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the timeline has no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether slot `index` carries a schedule.
    #[must_use]
    pub fn is_scheduled(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    /// The schedule for slot `index`, if any.
    #[must_use]
    pub fn schedule(&self, index: usize) -> Option<CharSchedule> {
        self.slots.get(index).copied().flatten()
    }

    /// Alpha for slot `index` at `now` under `run`.
    ///
    /// `None` for whitespace slots and out-of-range indices: those
    /// characters keep whatever alpha they had.
    #[must_use]
    pub fn alpha_at(&self, now: Duration, run: &FadeRun, index: usize) -> Option<f32> {
        let schedule = self.schedule(index)?;
        let elapsed = now.saturating_sub(run.begin());

        if elapsed < schedule.delay {
            return Some(run.direction().boundary_alpha());
        }

        let raw = if schedule.duration.is_zero() {
            1.0
        } else {
            ((elapsed - schedule.delay).as_secs_f64() / schedule.duration.as_secs_f64()) as f32
        };
        let progressed = (self.easing)(raw.clamp(0.0, 1.0));

        Some(match run.direction() {
            FadeDirection::In => progressed,
            FadeDirection::Out => 1.0 - progressed,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::ease_in;
    use crate::rng::Xorshift64;
    use proptest::prelude::*;

    const MS_100: Duration = Duration::from_millis(100);
    const MS_500: Duration = Duration::from_millis(500);
    const SEC_1: Duration = Duration::from_secs(1);

    fn single_slot(delay: Duration, duration: Duration) -> FadeTimeline {
        FadeTimeline {
            slots: vec![Some(CharSchedule { delay, duration })],
            easing: linear,
        }
    }

    #[test]
    fn holds_boundary_before_delay() {
        let tl = single_slot(MS_500, MS_500);
        let run_in = FadeRun::new(FadeDirection::In, Duration::ZERO, SEC_1);
        let run_out = FadeRun::new(FadeDirection::Out, Duration::ZERO, SEC_1);

        assert_eq!(tl.alpha_at(MS_100, &run_in, 0), Some(0.0));
        assert_eq!(tl.alpha_at(MS_100, &run_out, 0), Some(1.0));
    }

    #[test]
    fn reaches_target_after_delay_plus_duration() {
        let tl = single_slot(MS_100, MS_100);
        let run = FadeRun::new(FadeDirection::In, Duration::ZERO, SEC_1);
        let a = tl.alpha_at(Duration::from_millis(200), &run, 0).unwrap();
        assert!((a - 1.0).abs() < f32::EPSILON);

        // Stays clamped at the target afterwards.
        let a = tl.alpha_at(SEC_1, &run, 0).unwrap();
        assert!((a - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn midpoint_linear() {
        let tl = single_slot(Duration::ZERO, SEC_1);
        let run = FadeRun::new(FadeDirection::In, Duration::ZERO, SEC_1);
        let a = tl.alpha_at(MS_500, &run, 0).unwrap();
        assert!((a - 0.5).abs() < 0.01);
    }

    #[test]
    fn fade_out_inverts() {
        let tl = single_slot(Duration::ZERO, SEC_1);
        let run = FadeRun::new(FadeDirection::Out, Duration::ZERO, SEC_1);
        let a = tl.alpha_at(MS_500, &run, 0).unwrap();
        assert!((a - 0.5).abs() < 0.01);

        let a = tl.alpha_at(Duration::from_secs(2), &run, 0).unwrap();
        assert!((a - 0.0).abs() < f32::EPSILON, "stays clamped at 0, got {a}");
    }

    #[test]
    fn zero_duration_snaps_after_delay() {
        let tl = single_slot(MS_100, Duration::ZERO);
        let run = FadeRun::new(FadeDirection::In, Duration::ZERO, SEC_1);

        assert_eq!(tl.alpha_at(Duration::from_millis(50), &run, 0), Some(0.0));
        let a = tl.alpha_at(MS_100, &run, 0).unwrap();
        assert!((a - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn unscheduled_and_out_of_range_are_none() {
        let tl = FadeTimeline {
            slots: vec![None, Some(CharSchedule { delay: Duration::ZERO, duration: SEC_1 })],
            easing: linear,
        };
        let run = FadeRun::new(FadeDirection::In, Duration::ZERO, SEC_1);
        assert_eq!(tl.alpha_at(MS_500, &run, 0), None);
        assert!(tl.alpha_at(MS_500, &run, 1).is_some());
        assert_eq!(tl.alpha_at(MS_500, &run, 2), None);
    }

    #[test]
    fn now_before_begin_counts_as_zero_elapsed() {
        let tl = single_slot(MS_100, MS_100);
        let run = FadeRun::new(FadeDirection::In, SEC_1, SEC_1);
        assert_eq!(tl.alpha_at(MS_500, &run, 0), Some(0.0));
    }

    #[test]
    fn easing_applied_to_transition() {
        let tl = single_slot(Duration::ZERO, SEC_1).easing(ease_in);
        let run = FadeRun::new(FadeDirection::In, Duration::ZERO, SEC_1);
        let a = tl.alpha_at(MS_500, &run, 0).unwrap();
        assert!((a - 0.25).abs() < 0.01);
    }

    #[test]
    fn generate_skips_ineligible_slots() {
        let mut rng = Xorshift64::new(42);
        let tl = FadeTimeline::generate(&[true, false, true], SEC_1, &mut rng);
        assert_eq!(tl.len(), 3);
        assert!(tl.is_scheduled(0));
        assert!(!tl.is_scheduled(1));
        assert!(tl.is_scheduled(2));
    }

    #[test]
    fn generate_is_deterministic() {
        let eligible = [true, true, false, true];
        let mut a = Xorshift64::new(7);
        let mut b = Xorshift64::new(7);
        let ta = FadeTimeline::generate(&eligible, SEC_1, &mut a);
        let tb = FadeTimeline::generate(&eligible, SEC_1, &mut b);
        for i in 0..eligible.len() {
            assert_eq!(ta.schedule(i), tb.schedule(i));
        }
    }

    #[test]
    fn empty_timeline() {
        let tl = FadeTimeline::empty();
        assert!(tl.is_empty());
        let run = FadeRun::new(FadeDirection::In, Duration::ZERO, SEC_1);
        assert_eq!(tl.alpha_at(MS_500, &run, 0), None);
    }

    #[test]
    fn run_zero_nominal_clamped() {
        let run = FadeRun::new(FadeDirection::In, MS_100, Duration::ZERO);
        assert!(run.end() > run.begin());
        assert!(!run.is_finished(MS_100));
        assert!(run.is_finished(MS_100 + Duration::from_nanos(2)));
    }

    #[test]
    fn run_not_finished_at_exact_end() {
        let run = FadeRun::new(FadeDirection::Out, Duration::ZERO, SEC_1);
        assert!(!run.is_finished(SEC_1));
        assert!(run.is_finished(SEC_1 + Duration::from_nanos(1)));
    }

    proptest! {
        #[test]
        fn alpha_always_in_unit_range(
            seed in any::<u64>(),
            bound_ms in 1u64..5_000,
            now_ms in 0u64..20_000,
            begin_ms in 0u64..10_000,
            out in any::<bool>(),
        ) {
            let mut rng = Xorshift64::new(seed);
            let bound = Duration::from_millis(bound_ms);
            let tl = FadeTimeline::generate(&[true; 16], bound, &mut rng);
            let direction = if out { FadeDirection::Out } else { FadeDirection::In };
            let run = FadeRun::new(direction, Duration::from_millis(begin_ms), bound);
            for i in 0..16 {
                let a = tl.alpha_at(Duration::from_millis(now_ms), &run, i).unwrap();
                prop_assert!((0.0..=1.0).contains(&a), "alpha out of range: {a}");
            }
        }
    }
}
