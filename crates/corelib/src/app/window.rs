use crate::math::{UVec2, uvec2};
use crate::time::{Duration, TimeStep};

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub size: UVec2,
    pub max_fps: Option<u8>,
    pub msaa: bool,
    pub time_step: TimeStep,
    pub frame_limit: Option<u64>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "spinrect".to_string(),
            size: uvec2(600, 600),
            max_fps: Some(60),
            msaa: true,
            time_step: TimeStep::Real,
            frame_limit: None,
        }
    }
}

impl WindowConfig {
    /// Set the window's title
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Set the window's size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = uvec2(width, height);
        self
    }

    /// Limits the maximum fps
    pub fn max_fps(mut self, fps: u8) -> Self {
        self.max_fps = (fps > 0).then_some(fps);
        self
    }

    /// Run ticks as fast as possible
    pub fn unlimited_fps(mut self) -> Self {
        self.max_fps = None;
        self
    }

    /// Hint the renderer to use 4x multisampling
    pub fn msaa(mut self, enabled: bool) -> Self {
        self.msaa = enabled;
        self
    }

    /// Advance the clock by `dt` on each frame instead of following the wall clock
    pub fn fixed_time_step(mut self, dt: Duration) -> Self {
        self.time_step = TimeStep::Fixed(dt);
        self
    }

    /// Request the close after this number of frames
    pub fn frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.size, uvec2(600, 600));
        assert_eq!(config.max_fps, Some(60));
        assert!(config.msaa);
        assert_eq!(config.time_step, TimeStep::Real);
        assert_eq!(config.frame_limit, None);
    }

    #[test]
    fn test_zero_fps_means_unlimited() {
        let config = WindowConfig::default().max_fps(0);
        assert_eq!(config.max_fps, None);
    }

    #[test]
    fn test_builder_chain() {
        let config = WindowConfig::default()
            .title("demo")
            .size(320, 200)
            .msaa(false)
            .fixed_time_step(Duration::from_millis(16))
            .frame_limit(3);

        assert_eq!(config.title, "demo");
        assert_eq!(config.size, uvec2(320, 200));
        assert!(!config.msaa);
        assert_eq!(
            config.time_step,
            TimeStep::Fixed(Duration::from_millis(16))
        );
        assert_eq!(config.frame_limit, Some(3));
    }
}
