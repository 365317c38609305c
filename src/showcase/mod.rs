//! The eight animated examples and the dispatch from catalog entry to example.
//!
//! Each example is a small state machine over one tween. Two-state examples
//! flip their target on toggle; the looping examples pause and resume.

use std::time::Instant;

use ratatui::{Frame, layout::Rect, style::Color};

use crate::catalog::AnimationKind;
use crate::motion::{AnimationSpec, RepeatingTween, ToggleTween};
use crate::theme::Theme;

mod render;

/// Widest letter spacing reached by the smooth text example.
pub const MAX_LETTER_SPACING: u16 = 3;
/// Deepest shadow reached by the elevation example, in rows.
pub const MAX_ELEVATION: u16 = 3;
/// Largest padding reached by the padding example, in rows.
pub const MAX_PADDING: u16 = 3;

/// State of the example shown on a detail screen.
#[derive(Clone, Copy, Debug)]
pub enum ExampleView {
    /// Visibility fraction, `1.0` fully shown.
    AppearDisappear(ToggleTween<f32>),
    /// Panel background color.
    ChangeColour(ToggleTween<Color>),
    /// Growth fraction from compact to expanded.
    Size(ToggleTween<f32>),
    /// Horizontal travel fraction.
    Position(ToggleTween<f32>),
    /// Inner padding in rows (columns are doubled).
    Padding(ToggleTween<u16>),
    /// Shadow depth in rows.
    Elevation(ToggleTween<u16>),
    /// Text color looping between two palette colors.
    AnimateTextColour(RepeatingTween<Color>),
    /// Letter spacing looping between tight and wide.
    SmoothAnimateText(RepeatingTween<u16>),
}

impl ExampleView {
    /// What: Build the example associated with a catalog entry.
    ///
    /// Inputs:
    /// - `kind`: Catalog entry to dispatch on.
    /// - `theme`: Palette providing the colors the examples blend.
    /// - `spec`: Duration and easing of one transition.
    /// - `now`: Start time.
    ///
    /// Output:
    /// - A fresh example in its resting state.
    ///
    /// Details:
    /// - The appear example starts visible; the looping examples start running.
    #[must_use]
    pub fn for_kind(
        kind: AnimationKind,
        theme: &Theme,
        spec: AnimationSpec,
        now: Instant,
    ) -> Self {
        match kind {
            AnimationKind::AppearDisappear => {
                Self::AppearDisappear(ToggleTween::new_on(0.0, 1.0, spec, now))
            }
            AnimationKind::ChangeColour => {
                Self::ChangeColour(ToggleTween::new(theme.primary, theme.secondary, spec, now))
            }
            AnimationKind::Size => Self::Size(ToggleTween::new(0.0, 1.0, spec, now)),
            AnimationKind::Position => Self::Position(ToggleTween::new(0.0, 1.0, spec, now)),
            AnimationKind::Padding => Self::Padding(ToggleTween::new(0, MAX_PADDING, spec, now)),
            AnimationKind::Elevation => {
                Self::Elevation(ToggleTween::new(0, MAX_ELEVATION, spec, now))
            }
            AnimationKind::AnimateTextColour => Self::AnimateTextColour(RepeatingTween::new(
                theme.primary,
                theme.secondary,
                spec,
                now,
            )),
            AnimationKind::SmoothAnimateText => {
                Self::SmoothAnimateText(RepeatingTween::new(0, MAX_LETTER_SPACING, spec, now))
            }
        }
    }

    /// Catalog entry this example belongs to.
    #[must_use]
    pub const fn kind(&self) -> AnimationKind {
        match self {
            Self::AppearDisappear(_) => AnimationKind::AppearDisappear,
            Self::ChangeColour(_) => AnimationKind::ChangeColour,
            Self::Size(_) => AnimationKind::Size,
            Self::Position(_) => AnimationKind::Position,
            Self::Padding(_) => AnimationKind::Padding,
            Self::Elevation(_) => AnimationKind::Elevation,
            Self::AnimateTextColour(_) => AnimationKind::AnimateTextColour,
            Self::SmoothAnimateText(_) => AnimationKind::SmoothAnimateText,
        }
    }

    /// Flip a two-state example, or pause/resume a looping one.
    pub fn toggle(&mut self, now: Instant) {
        match self {
            Self::AppearDisappear(t) | Self::Size(t) | Self::Position(t) => t.toggle(now),
            Self::ChangeColour(t) => t.toggle(now),
            Self::Padding(t) | Self::Elevation(t) => t.toggle(now),
            Self::AnimateTextColour(t) => t.toggle_pause(now),
            Self::SmoothAnimateText(t) => t.toggle_pause(now),
        }
        tracing::debug!(example = %self.kind(), "toggle");
    }

    /// Whether further frames are needed to show motion.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        match self {
            Self::AppearDisappear(t) | Self::Size(t) | Self::Position(t) => t.is_animating(now),
            Self::ChangeColour(t) => t.is_animating(now),
            Self::Padding(t) | Self::Elevation(t) => t.is_animating(now),
            Self::AnimateTextColour(t) => t.is_running(),
            Self::SmoothAnimateText(t) => t.is_running(),
        }
    }

    /// One-line status under the example, e.g. `shown` or `paused`.
    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Self::AppearDisappear(t) => state_label(t.is_on(), "shown", "hidden"),
            Self::ChangeColour(t) => state_label(t.is_on(), "secondary", "primary"),
            Self::Size(t) => state_label(t.is_on(), "expanded", "collapsed"),
            Self::Position(t) => state_label(t.is_on(), "moved", "home"),
            Self::Padding(t) => state_label(t.is_on(), "padded", "tight"),
            Self::Elevation(t) => state_label(t.is_on(), "raised", "flat"),
            Self::AnimateTextColour(t) => state_label(t.is_running(), "running", "paused"),
            Self::SmoothAnimateText(t) => state_label(t.is_running(), "running", "paused"),
        }
    }

    /// Draw the example into `area` at time `now`.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, now: Instant) {
        match self {
            Self::AppearDisappear(t) => render::appear(f, area, theme, t.value(now)),
            Self::ChangeColour(t) => render::colour(f, area, theme, t.value(now)),
            Self::Size(t) => render::size(f, area, theme, t.value(now)),
            Self::Position(t) => render::position(f, area, theme, t.value(now)),
            Self::Padding(t) => render::padding(f, area, theme, t.value(now)),
            Self::Elevation(t) => render::elevation(f, area, theme, t.value(now)),
            Self::AnimateTextColour(t) => render::text_colour(f, area, t.value(now)),
            Self::SmoothAnimateText(t) => render::smooth_text(f, area, theme, t.value(now)),
        }
    }
}

/// Pick the on/off label for a status line.
const fn state_label(on: bool, yes: &'static str, no: &'static str) -> &'static str {
    if on { yes } else { no }
}

/// Text drawn inside each example; distinct per entry.
#[must_use]
pub const fn caption(kind: AnimationKind) -> &'static str {
    match kind {
        AnimationKind::AppearDisappear => "Now you see me",
        AnimationKind::ChangeColour => "Colour shift",
        AnimationKind::Size => "Growing box",
        AnimationKind::Position => "Sliding box",
        AnimationKind::Padding => "Padded content",
        AnimationKind::Elevation => "Elevated card",
        AnimationKind::AnimateTextColour => "Hello Motion",
        AnimationKind::SmoothAnimateText => "Smooth text",
    }
}
