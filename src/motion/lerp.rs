use ratatui::style::Color;

/// A value that can be interpolated between two endpoints.
pub trait Animatable: Copy {
    /// Interpolate from `self` to `to` at fraction `t`.
    ///
    /// `t` may leave `0.0..=1.0` when an overshooting easing is used; implementors
    /// must not panic in that case.
    #[must_use]
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        (to - self).mul_add(t, self)
    }
}

impl Animatable for u16 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn lerp(self, to: Self, t: f32) -> Self {
        let v = Animatable::lerp(f32::from(self), f32::from(to), t).round();
        v.clamp(0.0, f32::from(Self::MAX)) as Self
    }
}

/// Interpolate one 8-bit channel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    let v = Animatable::lerp(f32::from(from), f32::from(to), t).round();
    v.clamp(0.0, 255.0) as u8
}

impl Animatable for Color {
    /// What: Blend two terminal colors.
    ///
    /// Inputs:
    /// - `to`: Target color.
    /// - `t`: Blend fraction.
    ///
    /// Output:
    /// - Channel-wise blend when both colors are `Color::Rgb`.
    ///
    /// Details:
    /// - Indexed or named colors cannot be blended; they switch over at the midpoint.
    fn lerp(self, to: Self, t: f32) -> Self {
        match (self, to) {
            (Self::Rgb(r0, g0, b0), Self::Rgb(r1, g1, b1)) => Self::Rgb(
                lerp_channel(r0, r1, t),
                lerp_channel(g0, g1, t),
                lerp_channel(b0, b1, t),
            ),
            _ if t < 0.5 => self,
            _ => to,
        }
    }
}
