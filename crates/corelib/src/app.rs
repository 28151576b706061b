use crate::gfx::{AsCommands, Renderer};
use crate::math::{UVec2, Vec2};
use crate::time::Time;

mod window;
pub use window::*;

#[cfg(feature = "logs")]
pub mod logger;
#[cfg(feature = "logs")]
pub use logger::LogConfig;

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// `close_window` was called
    Requested,
    /// The renderer asked to close (i.e. the user closed the window)
    Renderer,
    /// The configured frame limit was reached
    FrameLimit,
}

/// Per-app state handed to the update callbacks
pub struct AppContext {
    pub(crate) title: String,
    pub(crate) size: UVec2,
    pub(crate) time: Time,
    pub(crate) renderer: Box<dyn Renderer>,
    pub(crate) close: Option<CloseReason>,
}

impl AppContext {
    pub(crate) fn new(config: &WindowConfig, renderer: Box<dyn Renderer>) -> Self {
        Self {
            title: config.title.clone(),
            size: config.size,
            time: Time::new(config.time_step),
            renderer,
            close: None,
        }
    }

    /// App's clock
    #[inline]
    pub fn time(&self) -> &Time {
        &self.time
    }

    /// Number of frames started so far, the current one included
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.time.frame_count()
    }

    /// Return the window's title
    #[inline]
    pub fn window_title(&self) -> &str {
        &self.title
    }

    /// Returns the size of the window
    #[inline]
    pub fn window_size(&self) -> Vec2 {
        self.size.as_vec2()
    }

    /// Return the window's width
    #[inline]
    pub fn window_width(&self) -> f32 {
        self.size.x as f32
    }

    /// Return the window's height
    #[inline]
    pub fn window_height(&self) -> f32 {
        self.size.y as f32
    }

    /// Sends the commands to the renderer for the current frame
    pub fn render<C>(&mut self, cmds: &C) -> Result<(), String>
    where
        C: AsCommands + ?Sized,
    {
        let frame = self.frame_count();
        cmds.commands()
            .iter()
            .try_for_each(|cmd| self.renderer.submit(cmd))
            .inspect_err(|e| log::error!("Render error on frame {frame}: {e}"))
    }

    /// Direct access to the renderer
    #[inline]
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        self.renderer.as_mut()
    }

    /// Stop the loop once the current frame ends
    #[inline]
    pub fn close_window(&mut self) {
        self.close.get_or_insert(CloseReason::Requested);
    }

    /// Returns if a close was requested
    #[inline]
    pub fn is_closing(&self) -> bool {
        self.close.is_some()
    }

    #[inline]
    pub fn close_reason(&self) -> Option<CloseReason> {
        self.close
    }
}
