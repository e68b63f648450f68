pub use kurbo::Vec2;

/// Straight (non-premultiplied) RGBA color with `f64` components.
///
/// Components are conventionally in `[0, 1]` but are neither validated nor clamped.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
    /// Alpha.
    pub a: f64,
}

/// The "unset" color, `(0, 0, 0, 0)`.
pub const COLOR_BLANK: Color = Color::BLANK;

impl Color {
    /// Same as [`COLOR_BLANK`].
    pub const BLANK: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    /// Build a color from four components.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Build a color from 8-bit channels, mapping `0..=255` onto `0.0..=1.0`.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn unit(c: u8) -> f64 {
            f64::from(c) / 255.0
        }

        Self::rgba(unit(r), unit(g), unit(b), unit(a))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLANK
    }
}

impl From<[f64; 4]> for Color {
    fn from([r, g, b, a]: [f64; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
