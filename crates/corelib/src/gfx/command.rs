use crate::gfx::Color;
use crate::math::{Mat3, Rect, Vec2, vec2};

/// A filled rectangle placed so that its local `pivot` sits on `position`,
/// rotated around that point by `rotation` degrees (clockwise in screen space).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectCommand {
    pub position: Vec2,
    pub size: Vec2,
    pub pivot: Vec2,
    pub rotation: f32,
    pub color: Color,
}

impl RectCommand {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            pivot: Vec2::ZERO,
            rotation: 0.0,
            color: Color::WHITE,
        }
    }

    /// Local to screen matrix
    pub fn matrix(&self) -> Mat3 {
        Mat3::from_translation(self.position)
            * Mat3::from_angle(self.rotation.to_radians())
            * Mat3::from_translation(-self.pivot)
    }

    /// The four corners in screen space (top-left, top-right, bottom-right, bottom-left)
    pub fn corners(&self) -> [Vec2; 4] {
        let m = self.matrix();
        let Vec2 { x: w, y: h } = self.size;
        [vec2(0.0, 0.0), vec2(w, 0.0), vec2(w, h), vec2(0.0, h)]
            .map(|p| m.transform_point2(p))
    }

    /// Axis aligned bounds of the rotated rectangle
    pub fn bounds(&self) -> Rect {
        let corners = self.corners();
        let (min, max) = corners
            .iter()
            .fold((Vec2::MAX, Vec2::MIN), |(min, max), p| (min.min(*p), max.max(*p)));
        Rect::from_min_max(min, max)
    }

    /// Checks if a screen space point falls inside the rotated rectangle
    pub fn contains(&self, point: Vec2) -> bool {
        let local = self.matrix().inverse().transform_point2(point);
        local.x >= 0.0 && local.y >= 0.0 && local.x < self.size.x && local.y < self.size.y
    }
}

/// One drawing instruction for a [`Renderer`](crate::gfx::Renderer)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCommand {
    Clear(Color),
    Rect(RectCommand),
}

/// Anything that can be seen as an ordered list of draw commands
pub trait AsCommands {
    fn commands(&self) -> &[DrawCommand];
}

impl AsCommands for [DrawCommand] {
    fn commands(&self) -> &[DrawCommand] {
        self
    }
}

impl<const N: usize> AsCommands for [DrawCommand; N] {
    fn commands(&self) -> &[DrawCommand] {
        self
    }
}

impl AsCommands for Vec<DrawCommand> {
    fn commands(&self) -> &[DrawCommand] {
        self
    }
}
