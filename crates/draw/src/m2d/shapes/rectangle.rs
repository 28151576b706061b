use crate::{Draw2D, Element2D};
use corelib::gfx::{Color, DrawCommand, RectCommand};
use corelib::math::Vec2;

pub struct Rectangle2D {
    color: Color,
    pos: Vec2,
    size: Vec2,
    pivot: Vec2,
    rotation_deg: f32,
    alpha: f32,
}

impl Rectangle2D {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            color: Color::WHITE,
            pos: position,
            size,
            pivot: Vec2::ZERO,
            rotation_deg: 0.0,
            alpha: 1.0,
        }
    }

    pub fn color(&mut self, color: Color) -> &mut Self {
        self.color = color;
        self
    }

    pub fn alpha(&mut self, alpha: f32) -> &mut Self {
        self.alpha = alpha;
        self
    }

    /// Local point, in pixels, placed at the position and used as rotation center
    pub fn pivot(&mut self, pivot: Vec2) -> &mut Self {
        self.pivot = pivot;
        self
    }

    /// Pivot at the middle of the rectangle
    pub fn centered(&mut self) -> &mut Self {
        self.pivot = self.size * 0.5;
        self
    }

    /// Rotation in radians
    pub fn rotation(&mut self, radians: f32) -> &mut Self {
        self.rotation_deg = radians.to_degrees();
        self
    }

    /// Rotation in degrees
    pub fn rotation_deg(&mut self, degrees: f32) -> &mut Self {
        self.rotation_deg = degrees;
        self
    }

    pub fn to_command(&self, global_alpha: f32) -> RectCommand {
        let c = self.color;
        RectCommand {
            position: self.pos,
            size: self.size,
            pivot: self.pivot,
            rotation: self.rotation_deg,
            color: c.with_alpha(c.a * self.alpha * global_alpha),
        }
    }
}

impl Element2D for Rectangle2D {
    fn process(&self, draw: &mut Draw2D) {
        // nothing to fill
        if self.size.x <= 0.0 || self.size.y <= 0.0 {
            return;
        }

        let cmd = self.to_command(draw.alpha());
        draw.push(DrawCommand::Rect(cmd));
    }
}
