pub use glam::*;

/// Axis aligned rectangle
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self {
            origin: min,
            size: max - min,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Overlapping area of both rects, `None` if they do not touch
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let min = self.min().max(other.min());
        let max = self.max().min(other.max());
        let rect = Rect::from_min_max(min, max);
        (!rect.is_empty()).then_some(rect)
    }

    /// Integer pixel span `(min, max)` covered by the rect inside a `bounds` sized surface,
    /// `max` is exclusive
    pub fn pixel_span(&self, bounds: UVec2) -> Option<(UVec2, UVec2)> {
        let surface = Rect::new(Vec2::ZERO, bounds.as_vec2());
        let clipped = self.intersection(&surface)?;
        let min = clipped.min().floor().as_uvec2();
        let max = clipped.max().ceil().as_uvec2().min(bounds);
        (min.x < max.x && min.y < max.y).then_some((min, max))
    }
}
