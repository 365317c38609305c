/// Easing curve applied to a linear time fraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Cubic acceleration from rest.
    EaseIn,
    /// Cubic deceleration to rest.
    EaseOut,
    /// Cubic acceleration then deceleration.
    #[default]
    EaseInOut,
    /// Deceleration that overshoots the target slightly before settling.
    EaseOutBack,
}

/// Overshoot constant for [`Easing::EaseOutBack`].
const BACK_C1: f32 = 1.701_58;

impl Easing {
    /// What: Map a linear fraction onto this curve.
    ///
    /// Inputs:
    /// - `t`: Linear progress; values outside `0.0..=1.0` are clamped.
    ///
    /// Output:
    /// - Eased progress. `0.0` maps to `0.0` and `1.0` maps to `1.0` for every curve.
    ///
    /// Details:
    /// - [`Easing::EaseOutBack`] may exceed `1.0` in between.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = (-2.0f32).mul_add(t, 2.0);
                    1.0 - u * u * u / 2.0
                }
            }
            Self::EaseOutBack => {
                let c3 = BACK_C1 + 1.0;
                let u = t - 1.0;
                c3.mul_add(u * u * u, BACK_C1 * u * u) + 1.0
            }
        }
    }

    /// Parse a settings value such as `ease_in_out` or `linear`.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "linear" => Some(Self::Linear),
            "ease_in" | "in" => Some(Self::EaseIn),
            "ease_out" | "out" => Some(Self::EaseOut),
            "ease_in_out" | "in_out" => Some(Self::EaseInOut),
            "ease_out_back" | "back" => Some(Self::EaseOutBack),
            _ => None,
        }
    }

    /// Settings key for this curve.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "ease_in",
            Self::EaseOut => "ease_out",
            Self::EaseInOut => "ease_in_out",
            Self::EaseOutBack => "ease_out_back",
        }
    }
}
