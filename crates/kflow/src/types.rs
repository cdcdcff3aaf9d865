use rgb::RGB8;

/// Upper bound (exclusive for random draws) of a color component.
pub const COMPONENT_MAX: f32 = 255.0;

/// A point in the 3-component sRGB space, components in `0.0..=255.0`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub(crate) fn squared_distance(self, other: Self) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        dr.mul_add(dr, dg.mul_add(dg, db * db))
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        self.squared_distance(other).sqrt()
    }

    /// Moves `self` towards `target` by `fraction` of the remaining distance.
    #[inline]
    pub(crate) fn step_towards(self, target: Self, fraction: f32) -> Self {
        Self {
            r: self.r + (target.r - self.r) * fraction,
            g: self.g + (target.g - self.g) * fraction,
            b: self.b + (target.b - self.b) * fraction,
        }
    }

    /// Rounds to the nearest integer and clamps into the `u8` range.
    pub fn to_rgb8(self) -> RGB8 {
        #[inline(always)]
        fn quantize(c: f32) -> u8 {
            c.round().clamp(0.0, COMPONENT_MAX) as u8
        }
        RGB8::new(quantize(self.r), quantize(self.g), quantize(self.b))
    }
}

impl From<RGB8> for Color {
    fn from(rgb: RGB8) -> Self {
        Self::new(rgb.r as f32, rgb.g as f32, rgb.b as f32)
    }
}
