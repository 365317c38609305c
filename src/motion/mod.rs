//! Motion primitives used by the example views.
//!
//! [`Easing`] curves shape a linear fraction, [`Animatable`] values know how to
//! interpolate between two endpoints, and the tween types turn wall-clock time
//! into an eased value. Every time-dependent call takes the current
//! [`std::time::Instant`] so callers (and tests) control the clock.

mod easing;
mod lerp;
mod tween;

pub use easing::Easing;
pub use lerp::Animatable;
pub use tween::{AnimationSpec, RepeatingTween, ToggleTween};
