use crate::m2d::shapes::Rectangle2D;
use corelib::gfx::{AsCommands, Color, DrawCommand};
use corelib::math::Vec2;
use smallvec::SmallVec;
use std::ops::{Deref, DerefMut};

// This is used to avoid heap allocations when doing small number of drawcalls
const STACK_ALLOCATED_COMMANDS: usize = 8;

/// Something that knows how to turn itself into draw commands
pub trait Element2D {
    fn process(&self, draw: &mut Draw2D);
}

/// Pending element, it is added to the `Draw2D` once dropped
pub struct Drawing<'a, T>
where
    T: Element2D,
{
    inner: T,
    draw: &'a mut Draw2D,
}

impl<'a, T> Drawing<'a, T>
where
    T: Element2D,
{
    pub fn new(draw: &'a mut Draw2D, inner: T) -> Self {
        Self { inner, draw }
    }
}

impl<T> Drop for Drawing<'_, T>
where
    T: Element2D,
{
    fn drop(&mut self) {
        self.draw.add_element(&self.inner);
    }
}

impl<T> Deref for Drawing<'_, T>
where
    T: Element2D,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for Drawing<'_, T>
where
    T: Element2D,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

/// Ordered list of draw commands for one frame
#[derive(Clone, Debug)]
pub struct Draw2D {
    size: Vec2,
    alpha: f32,
    commands: SmallVec<DrawCommand, STACK_ALLOCATED_COMMANDS>,
}

impl Default for Draw2D {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

impl Draw2D {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            alpha: 1.0,
            commands: SmallVec::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Fill the whole surface with `color`
    #[inline]
    pub fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    /// Global alpha multiplied into the next elements
    #[inline]
    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn add_element<T>(&mut self, element: &T)
    where
        T: Element2D,
    {
        element.process(self);
    }

    /// Append a raw command
    #[inline]
    pub fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }

    #[inline]
    pub fn rect(&mut self, pos: Vec2, size: Vec2) -> Drawing<'_, Rectangle2D> {
        Drawing::new(self, Rectangle2D::new(pos, size))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl AsCommands for Draw2D {
    fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::math::vec2;

    #[test]
    fn test_commands_keep_order() {
        let mut draw = Draw2D::new(vec2(600.0, 600.0));
        draw.clear(Color::BLACK);
        draw.rect(vec2(10.0, 20.0), vec2(100.0, 100.0))
            .color(Color::CRIMSON);

        let cmds = draw.commands();
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0], DrawCommand::Clear(Color::BLACK));
        let DrawCommand::Rect(rect) = cmds[1] else {
            panic!("expected a rect");
        };
        assert_eq!(rect.position, vec2(10.0, 20.0));
        assert_eq!(rect.color, Color::CRIMSON);
    }

    #[test]
    fn test_global_alpha() {
        let mut draw = Draw2D::new(vec2(10.0, 10.0));
        draw.set_alpha(0.5);
        draw.rect(vec2(0.0, 0.0), vec2(1.0, 1.0)).alpha(0.5);

        let DrawCommand::Rect(rect) = draw.commands()[0] else {
            panic!("expected a rect");
        };
        assert_eq!(rect.color.a, 0.25);
    }

    #[test]
    fn test_empty() {
        let draw = Draw2D::new(vec2(1.0, 1.0));
        assert!(draw.is_empty());
        assert_eq!(draw.size(), vec2(1.0, 1.0));
    }
}
