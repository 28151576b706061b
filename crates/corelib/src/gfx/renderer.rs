use crate::app::WindowConfig;
use crate::gfx::{AsCommands, Color, DrawCommand, RectCommand};
use std::cell::RefCell;
use std::rc::Rc;

/// Drawing surface driven by the app loop.
///
/// A frame is always bracketed by [`begin_frame`](Renderer::begin_frame) and
/// [`end_frame`](Renderer::end_frame), the latter presents the result.
/// Backends only need to know how to clear and how to fill a rectangle.
pub trait Renderer {
    /// Creates the surface using the window's size, title and msaa hint
    fn init(&mut self, _config: &WindowConfig) -> Result<(), String> {
        Ok(())
    }

    fn begin_frame(&mut self) -> Result<(), String>;

    fn clear(&mut self, color: Color) -> Result<(), String>;

    fn draw_rect(&mut self, rect: &RectCommand) -> Result<(), String>;

    /// Presents the frame
    fn end_frame(&mut self) -> Result<(), String>;

    /// The surface wants the loop to stop (i.e. the window was closed)
    fn should_close(&self) -> bool {
        false
    }

    /// Releases the surface, called once after the loop ends
    fn shutdown(&mut self) {}

    fn submit(&mut self, cmd: &DrawCommand) -> Result<(), String> {
        match cmd {
            DrawCommand::Clear(color) => self.clear(*color),
            DrawCommand::Rect(rect) => self.draw_rect(rect),
        }
    }

    fn submit_all(&mut self, cmds: &dyn AsCommands) -> Result<(), String> {
        cmds.commands().iter().try_for_each(|cmd| self.submit(cmd))
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn init(&mut self, config: &WindowConfig) -> Result<(), String> {
        (**self).init(config)
    }

    fn begin_frame(&mut self) -> Result<(), String> {
        (**self).begin_frame()
    }

    fn clear(&mut self, color: Color) -> Result<(), String> {
        (**self).clear(color)
    }

    fn draw_rect(&mut self, rect: &RectCommand) -> Result<(), String> {
        (**self).draw_rect(rect)
    }

    fn end_frame(&mut self) -> Result<(), String> {
        (**self).end_frame()
    }

    fn should_close(&self) -> bool {
        (**self).should_close()
    }

    fn shutdown(&mut self) {
        (**self).shutdown()
    }
}

/// Shared renderer, the caller keeps a handle to inspect it once the app is done
impl<R: Renderer> Renderer for Rc<RefCell<R>> {
    fn init(&mut self, config: &WindowConfig) -> Result<(), String> {
        self.borrow_mut().init(config)
    }

    fn begin_frame(&mut self) -> Result<(), String> {
        self.borrow_mut().begin_frame()
    }

    fn clear(&mut self, color: Color) -> Result<(), String> {
        self.borrow_mut().clear(color)
    }

    fn draw_rect(&mut self, rect: &RectCommand) -> Result<(), String> {
        self.borrow_mut().draw_rect(rect)
    }

    fn end_frame(&mut self) -> Result<(), String> {
        self.borrow_mut().end_frame()
    }

    fn should_close(&self) -> bool {
        self.borrow().should_close()
    }

    fn shutdown(&mut self) {
        self.borrow_mut().shutdown()
    }
}

/// Renderer that discards everything, used when the app has no surface
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn begin_frame(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn clear(&mut self, _color: Color) -> Result<(), String> {
        Ok(())
    }

    fn draw_rect(&mut self, _rect: &RectCommand) -> Result<(), String> {
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2;

    #[derive(Default)]
    struct Log(Vec<&'static str>);

    impl Renderer for Log {
        fn begin_frame(&mut self) -> Result<(), String> {
            self.0.push("begin");
            Ok(())
        }

        fn clear(&mut self, _color: Color) -> Result<(), String> {
            self.0.push("clear");
            Ok(())
        }

        fn draw_rect(&mut self, _rect: &RectCommand) -> Result<(), String> {
            self.0.push("rect");
            Ok(())
        }

        fn end_frame(&mut self) -> Result<(), String> {
            self.0.push("end");
            Ok(())
        }
    }

    static_assertions::assert_obj_safe!(Renderer);

    #[test]
    fn test_submit_dispatches_by_command() {
        let mut log = Log::default();
        let cmds = vec![
            DrawCommand::Clear(Color::BLACK),
            DrawCommand::Rect(RectCommand::new(vec2(0.0, 0.0), vec2(1.0, 1.0))),
        ];
        log.submit_all(&cmds).unwrap();
        assert_eq!(log.0, vec!["clear", "rect"]);
    }

    #[test]
    fn test_boxed_renderer_forwards() {
        let mut boxed: Box<dyn Renderer> = Box::new(NullRenderer);
        assert!(boxed.begin_frame().is_ok());
        assert!(boxed.submit(&DrawCommand::Clear(Color::BLACK)).is_ok());
        assert!(boxed.end_frame().is_ok());
        assert!(!boxed.should_close());
    }

    #[test]
    fn test_shared_renderer_forwards() {
        let shared = Rc::new(RefCell::new(Log::default()));
        let mut handle = shared.clone();
        handle.begin_frame().unwrap();
        handle.clear(Color::BLACK).unwrap();
        handle.end_frame().unwrap();
        assert_eq!(shared.borrow().0, vec!["begin", "clear", "end"]);
    }
}
