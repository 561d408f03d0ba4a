//! RGBA colour primitive handed to drawable slots.

use std::ops::Mul;

/// Linear RGBA colour with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const SKY_BLUE: Color = Color::rgb(0.529, 0.808, 0.922);
    pub const GOLD: Color = Color::rgb(1.0, 0.843, 0.0);
    pub const DARK_GRAY: Color = Color::rgb(0.25, 0.25, 0.25);
    pub const LIGHT_GRAY: Color = Color::rgb(0.75, 0.75, 0.75);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Linear interpolation from `a` (weight 0) to `b` (weight 1).
    ///
    /// Every channel of the result is clamped to `0.0..=1.0`, so weights outside
    /// the unit range saturate instead of producing invalid colours.
    pub fn lerp(a: Color, b: Color, weight: f32) -> Color {
        let mix = |x: f32, y: f32| (x + (y - x) * weight).clamp(0.0, 1.0);
        Color {
            r: mix(a.r, b.r),
            g: mix(a.g, b.g),
            b: mix(a.b, b.b),
            a: mix(a.a, b.a),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Component-wise tint.
impl Mul<Color> for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Self::Output {
        Color {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
            a: self.a * rhs.a,
        }
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}
