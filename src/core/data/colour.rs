#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`; `d` is clamped to [0, 1] and channels truncate.
    #[must_use]
    pub fn lerp(self, other: Self, d: f64) -> Self {
        let d = d.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f64 * (1.0 - d) + b as f64 * d) as u8;

        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}
