use std::time::{Duration, Instant};

use super::{Animatable, Easing};

/// Duration and curve of a single transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationSpec {
    /// Time a full transition takes.
    pub duration: Duration,
    /// Curve applied to the linear progress.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Build a spec from a duration and a curve.
    #[must_use]
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Linear fraction of a full transition covered by `elapsed`, unclamped.
    ///
    /// A zero duration covers any elapsed time in a single step.
    fn fraction_of(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return f32::INFINITY;
        }
        elapsed.as_secs_f32() / self.duration.as_secs_f32()
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::new(Duration::from_millis(600), Easing::EaseInOut)
    }
}

/// A two-state animation that eases toward whichever state is targeted.
///
/// Flipping the target while a transition is running continues from the
/// current position instead of jumping.
#[derive(Clone, Copy, Debug)]
pub struct ToggleTween<T: Animatable> {
    /// Value when fully off.
    off: T,
    /// Value when fully on.
    on: T,
    /// Transition timing.
    spec: AnimationSpec,
    /// Current target state.
    target_on: bool,
    /// Linear progress recorded at `anchor_at`.
    anchor: f32,
    /// Moment the current leg started.
    anchor_at: Instant,
}

impl<T: Animatable> ToggleTween<T> {
    /// Create a tween resting in the off state.
    #[must_use]
    pub const fn new(off: T, on: T, spec: AnimationSpec, now: Instant) -> Self {
        Self {
            off,
            on,
            spec,
            target_on: false,
            anchor: 0.0,
            anchor_at: now,
        }
    }

    /// Create a tween resting in the on state.
    #[must_use]
    pub const fn new_on(off: T, on: T, spec: AnimationSpec, now: Instant) -> Self {
        Self {
            off,
            on,
            spec,
            target_on: true,
            anchor: 1.0,
            anchor_at: now,
        }
    }

    /// Linear progress from off (`0.0`) to on (`1.0`) at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let delta = self
            .spec
            .fraction_of(now.saturating_duration_since(self.anchor_at));
        if self.target_on {
            (self.anchor + delta).min(1.0)
        } else {
            (self.anchor - delta).max(0.0)
        }
    }

    /// Eased value at `now`.
    #[must_use]
    pub fn value(&self, now: Instant) -> T {
        self.off
            .lerp(self.on, self.spec.easing.apply(self.progress(now)))
    }

    /// Target the given state, continuing from the current position.
    pub fn set(&mut self, on: bool, now: Instant) {
        if on == self.target_on {
            return;
        }
        self.anchor = self.progress(now);
        self.anchor_at = now;
        self.target_on = on;
    }

    /// Flip the target state.
    pub fn toggle(&mut self, now: Instant) {
        self.set(!self.target_on, now);
    }

    /// Current target state.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.target_on
    }

    /// Whether the value is still moving toward the target.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        let p = self.progress(now);
        if self.target_on { p < 1.0 } else { p > 0.0 }
    }
}

/// An endless animation bouncing between two values.
///
/// Runs `from → to → from → ...`, one leg per spec duration, and can be paused.
#[derive(Clone, Copy, Debug)]
pub struct RepeatingTween<T: Animatable> {
    /// Value at the start of every even leg.
    from: T,
    /// Value at the end of every even leg.
    to: T,
    /// Timing of one leg.
    spec: AnimationSpec,
    /// Running time accumulated before the last resume.
    banked: Duration,
    /// When the tween last resumed; `None` while paused.
    resumed_at: Option<Instant>,
}

impl<T: Animatable> RepeatingTween<T> {
    /// Create a running tween starting at `from`.
    #[must_use]
    pub const fn new(from: T, to: T, spec: AnimationSpec, now: Instant) -> Self {
        Self {
            from,
            to,
            spec,
            banked: Duration::ZERO,
            resumed_at: Some(now),
        }
    }

    /// Total running time at `now`, excluding paused stretches.
    fn running_time(&self, now: Instant) -> Duration {
        self.banked
            + self
                .resumed_at
                .map_or(Duration::ZERO, |r| now.saturating_duration_since(r))
    }

    /// Linear position within the current leg, mirrored on odd legs.
    #[must_use]
    pub fn phase(&self, now: Instant) -> f32 {
        let cycles = self.spec.fraction_of(self.running_time(now));
        if !cycles.is_finite() {
            return 0.0;
        }
        let leg = cycles.floor();
        let within = cycles - leg;
        if leg.rem_euclid(2.0) < 1.0 { within } else { 1.0 - within }
    }

    /// Eased value at `now`.
    #[must_use]
    pub fn value(&self, now: Instant) -> T {
        self.from
            .lerp(self.to, self.spec.easing.apply(self.phase(now)))
    }

    /// Pause a running tween or resume a paused one.
    pub fn toggle_pause(&mut self, now: Instant) {
        match self.resumed_at.take() {
            Some(r) => self.banked += now.saturating_duration_since(r),
            None => self.resumed_at = Some(now),
        }
    }

    /// Whether the tween is currently advancing.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.resumed_at.is_some()
    }
}
