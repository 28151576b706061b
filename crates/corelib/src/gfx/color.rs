/// RGBA color, channels in `[0, 1]`
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Raylib's `RED` (230, 41, 55)
    pub const CRIMSON: Color = Color::rgba_u8(230, 41, 55, 255);

    #[inline(always)]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Color from 8 bit channels
    pub const fn rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    #[inline(always)]
    pub const fn with_alpha(&self, alpha: f32) -> Color {
        Self::new(self.r, self.g, self.b, alpha)
    }

    /// 8 bit channels, clamped and rounded
    pub fn to_rgba_u8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Source-over compositing of `self` on top of `dst`
    pub fn blend_over(&self, dst: Color) -> Color {
        let src_a = self.a.clamp(0.0, 1.0);
        if src_a >= 1.0 {
            return *self;
        }

        let dst_a = dst.a * (1.0 - src_a);
        let out_a = src_a + dst_a;
        if out_a <= 0.0 {
            return Color::TRANSPARENT;
        }

        let channel = |s: f32, d: f32| (s * src_a + d * dst_a) / out_a;
        Color::new(
            channel(self.r, dst.r),
            channel(self.g, dst.g),
            channel(self.b, dst.b),
            out_a,
        )
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Color::rgba_u8(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_crimson_bytes() {
        assert_eq!(Color::CRIMSON.to_rgba_u8(), [230, 41, 55, 255]);
        assert_eq!(Color::from([230, 41, 55, 255]), Color::CRIMSON);
    }

    #[test]
    fn test_to_rgba_u8_clamps() {
        let c = Color::new(1.5, -0.2, 0.5, 1.0);
        assert_eq!(c.to_rgba_u8(), [255, 0, 128, 255]);
    }

    #[test]
    fn test_blend_opaque_replaces() {
        let out = Color::CRIMSON.blend_over(Color::BLACK);
        assert_eq!(out, Color::CRIMSON);
    }

    #[test]
    fn test_blend_half_alpha() {
        let out = Color::WHITE.with_alpha(0.5).blend_over(Color::BLACK);
        assert!(approx_eq(out.r, 0.5));
        assert!(approx_eq(out.g, 0.5));
        assert!(approx_eq(out.b, 0.5));
        assert!(approx_eq(out.a, 1.0));
    }

    #[test]
    fn test_blend_transparent_over_transparent() {
        let out = Color::TRANSPARENT.blend_over(Color::TRANSPARENT);
        assert_eq!(out, Color::TRANSPARENT);
    }
}
