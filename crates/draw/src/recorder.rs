use corelib::app::WindowConfig;
use corelib::gfx::{Color, DrawCommand, RectCommand, Renderer};
use std::collections::VecDeque;

/// Renderer that stores the commands of each frame instead of drawing them.
///
/// Useful to check what an app draws without a surface.
#[derive(Debug, Clone)]
pub struct Recorder {
    current: Vec<DrawCommand>,
    frames: VecDeque<Vec<DrawCommand>>,
    keep: usize,
    count: u64,
    close_after: Option<u64>,
    in_frame: bool,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            current: vec![],
            frames: VecDeque::new(),
            keep: 1,
            count: 0,
            close_after: None,
            in_frame: false,
        }
    }

    /// Number of presented frames kept in memory, at least one
    pub fn keep_frames(mut self, n: usize) -> Self {
        self.keep = n.max(1);
        self
    }

    /// Ask the loop to stop once `n` frames were presented
    pub fn close_after(mut self, n: u64) -> Self {
        self.close_after = Some(n);
        self
    }

    /// Frames presented so far
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.count
    }

    /// Commands of the last presented frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        self.frames.back().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Kept frames, oldest first
    pub fn frames(&self) -> impl Iterator<Item = &[DrawCommand]> {
        self.frames.iter().map(Vec::as_slice)
    }

    fn ensure_frame(&self, op: &str) -> Result<(), String> {
        if self.in_frame {
            Ok(())
        } else {
            Err(format!("Recorder: '{op}' called outside of a frame"))
        }
    }

    /// Rects of the last presented frame
    pub fn last_rects(&self) -> impl Iterator<Item = &RectCommand> {
        self.last_frame().iter().filter_map(|cmd| match cmd {
            DrawCommand::Rect(rect) => Some(rect),
            _ => None,
        })
    }
}

impl Renderer for Recorder {
    fn init(&mut self, config: &WindowConfig) -> Result<(), String> {
        log::debug!(
            "Recording '{}' {}x{}",
            config.title,
            config.size.x,
            config.size.y
        );
        Ok(())
    }

    fn begin_frame(&mut self) -> Result<(), String> {
        if self.in_frame {
            return Err("Recorder: begin_frame called twice".to_string());
        }

        self.in_frame = true;
        self.current.clear();
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<(), String> {
        self.ensure_frame("clear")?;
        self.current.push(DrawCommand::Clear(color));
        Ok(())
    }

    fn draw_rect(&mut self, rect: &RectCommand) -> Result<(), String> {
        self.ensure_frame("draw_rect")?;
        self.current.push(DrawCommand::Rect(*rect));
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), String> {
        self.ensure_frame("end_frame")?;
        self.in_frame = false;
        self.count += 1;
        log::trace!("Frame {} recorded {} commands", self.count, self.current.len());

        if self.frames.len() >= self.keep {
            self.frames.pop_front();
        }
        self.frames.push_back(std::mem::take(&mut self.current));
        Ok(())
    }

    fn should_close(&self) -> bool {
        self.close_after.is_some_and(|n| self.count >= n)
    }
}
