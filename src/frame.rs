//! Time driven animation of a single rectangle.
//!
//! Each frame the rectangle slides to the right at a constant speed, wrapping
//! back to the left edge, and swings its rotation following `sin(time)`.
//! Everything is computed from the elapsed time alone, no state is carried
//! from one frame to the next.

use corelib::app::{AppContext, WindowConfig};
use corelib::gfx::{Color, RectCommand, Renderer};
use corelib::math::{UVec2, Vec2, uvec2, vec2};
use corelib::time::TimeSource;
use corelib::AppBuilder;
use draw::Draw2D;

/// What the animation looks like
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSettings {
    /// Surface size in pixels
    pub screen: UVec2,
    /// Horizontal speed in pixels per second
    pub speed: f64,
    pub size: Vec2,
    /// Local point placed at the position, the rotation happens around it
    pub pivot: Vec2,
    pub color: Color,
    pub background: Color,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            screen: uvec2(600, 600),
            speed: 200.0,
            size: vec2(100.0, 100.0),
            pivot: Vec2::ZERO,
            color: Color::CRIMSON,
            background: Color::BLACK,
        }
    }
}

impl FrameSettings {
    /// Default animation sized to the window
    pub fn from_window(config: &WindowConfig) -> Self {
        Self {
            screen: config.size,
            ..Default::default()
        }
    }

    pub fn screen(mut self, width: u32, height: u32) -> Self {
        self.screen = uvec2(width, height);
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = vec2(width, height);
        self
    }

    pub fn pivot(mut self, pivot: Vec2) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }
}

/// Placement of the rectangle for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    /// Seconds since the app started
    pub elapsed: f64,
    pub position: Vec2,
    /// Degrees, positive is clockwise on screen
    pub rotation: f32,
}

impl FrameState {
    /// Computes the state for `elapsed` seconds, the same input always gives the same state
    pub fn at(elapsed: f64, settings: &FrameSettings) -> Self {
        let width = settings.screen.x as i64;
        // whole pixels first, then wrap, so the rect jumps back to the left edge
        let x = if width == 0 {
            0
        } else {
            ((elapsed * settings.speed).floor() as i64).rem_euclid(width)
        };
        let y = settings.screen.y as f32 * 0.5;
        let rotation = elapsed.sin().to_degrees() as f32;

        Self {
            elapsed,
            position: vec2(x as f32, y),
            rotation,
        }
    }

    pub fn to_command(&self, settings: &FrameSettings) -> RectCommand {
        RectCommand {
            position: self.position,
            size: settings.size,
            pivot: settings.pivot,
            rotation: self.rotation,
            color: settings.color,
        }
    }
}

/// Turns elapsed time into draw commands
#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    settings: FrameSettings,
    last: Option<FrameState>,
}

impl FrameDriver {
    pub fn new(settings: FrameSettings) -> Self {
        Self {
            settings,
            last: None,
        }
    }

    #[inline]
    pub fn settings(&self) -> &FrameSettings {
        &self.settings
    }

    /// State issued by the last [`tick`](Self::tick)
    #[inline]
    pub fn last_state(&self) -> Option<FrameState> {
        self.last
    }

    #[inline]
    pub fn state(&self, time: &impl TimeSource) -> FrameState {
        FrameState::at(time.elapsed_secs(), &self.settings)
    }

    /// Clear and rectangle commands for the current time
    pub fn draw(&self, time: &impl TimeSource) -> Draw2D {
        self.draw_state(&self.state(time))
    }

    fn draw_state(&self, state: &FrameState) -> Draw2D {
        let FrameSettings {
            screen,
            size,
            pivot,
            color,
            background,
            ..
        } = self.settings;

        let mut draw = Draw2D::new(screen.as_vec2());
        draw.clear(background);
        draw.rect(state.position, size)
            .pivot(pivot)
            .rotation_deg(state.rotation)
            .color(color);

        draw
    }

    /// Draws the current frame on `renderer`, which must be inside a frame
    pub fn tick<R>(&mut self, time: &impl TimeSource, renderer: &mut R) -> Result<FrameState, String>
    where
        R: Renderer + ?Sized,
    {
        let state = self.state(time);
        renderer.submit_all(&self.draw_state(&state))?;

        log::trace!(
            "t={:.3} pos=({}, {}) rot={:.2}",
            state.elapsed,
            state.position.x,
            state.position.y,
            state.rotation
        );

        self.last = Some(state);
        Ok(state)
    }
}

/// App that animates the rectangle on each frame until the window is closed.
///
/// Renderer errors during a frame are logged and the next frame goes on.
pub fn app(settings: FrameSettings) -> AppBuilder<FrameDriver> {
    corelib::init_with(move || FrameDriver::new(settings)).update(on_frame)
}

fn on_frame(driver: &mut FrameDriver, ctx: &mut AppContext) {
    let elapsed = ctx.time().elapsed_f64();
    if let Err(e) = driver.tick(&elapsed, ctx.renderer()) {
        log::error!("Cannot draw frame {}: {e}", ctx.frame_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::gfx::{AsCommands, DrawCommand};
    use corelib::time::Duration;
    use draw::{Canvas, Recorder};
    use std::cell::RefCell;
    use std::f64::consts::{FRAC_PI_2, PI};
    use std::rc::Rc;

    static_assertions::assert_impl_all!(FrameState: Copy, Send, Sync);
    static_assertions::assert_impl_all!(FrameSettings: Copy, Default);

    const EPS: f32 = 1e-3;

    fn state(t: f64) -> FrameState {
        FrameState::at(t, &FrameSettings::default())
    }

    #[test]
    fn test_start_position() {
        let s = state(0.0);
        assert_eq!(s.position, vec2(0.0, 300.0));
        assert_eq!(s.rotation, 0.0);
    }

    #[test]
    fn test_peak_rotation_at_half_pi() {
        let s = state(FRAC_PI_2);
        assert!((s.rotation - 57.29578).abs() < EPS, "got {}", s.rotation);
        assert_eq!(s.position.x, 314.0);
    }

    #[test]
    fn test_wraps_to_left_edge_at_three_seconds() {
        let s = state(3.0);
        assert_eq!(s.position.x, 0.0);
        assert!((s.rotation - 8.0857).abs() < EPS, "got {}", s.rotation);
    }

    #[test]
    fn test_jump_on_wrap() {
        // last pixel before the wrap then straight back to zero
        assert_eq!(state(2.999).position.x, 599.0);
        assert_eq!(state(3.0).position.x, 0.0);
        assert_eq!(state(3.5).position.x, 100.0);
    }

    #[test]
    fn test_position_and_rotation_ranges() {
        (0..20_000).map(|i| i as f64 * 0.0137).for_each(|t| {
            let s = state(t);
            assert!((0.0..600.0).contains(&s.position.x), "x out of range at t={t}");
            assert_eq!(s.position.x.fract(), 0.0);
            assert_eq!(s.position.y, 300.0);
            assert!((-180.0..=180.0).contains(&s.rotation));
            assert!(s.rotation.abs() <= 57.29578 + EPS);
        });
    }

    #[test]
    fn test_same_time_same_state() {
        let driver = FrameDriver::default();
        let t = Duration::from_millis(1234);
        assert_eq!(driver.state(&t), driver.state(&t));
        assert_eq!(driver.state(&t), state(t.as_secs_f64()));
        assert_eq!(driver.state(&t).position.x, 246.0);
    }

    #[test]
    fn test_negative_time_stays_on_screen() {
        let s = state(-0.5);
        assert_eq!(s.position.x, 500.0);
        assert!(s.rotation < 0.0);
    }

    #[test]
    fn test_zero_width_screen() {
        let settings = FrameSettings::default().screen(0, 50);
        let s = FrameState::at(10.0, &settings);
        assert_eq!(s.position, vec2(0.0, 25.0));
    }

    #[test]
    fn test_odd_height_keeps_half_pixel() {
        let settings = FrameSettings::default().screen(600, 601);
        let s = FrameState::at(0.0, &settings);
        assert_eq!(s.position.y, 300.5);
        assert_eq!(s.to_command(&settings).position.y, 300.5);
    }

    #[test]
    fn test_draw_clears_then_draws_rect() {
        let driver = FrameDriver::default();
        let draw = driver.draw(&0.5);
        let cmds = draw.commands();
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0], DrawCommand::Clear(Color::BLACK));

        let DrawCommand::Rect(rect) = cmds[1] else {
            panic!("expected a rect");
        };
        assert_eq!(rect, state(0.5).to_command(driver.settings()));
        assert_eq!(rect.size, vec2(100.0, 100.0));
        assert_eq!(rect.pivot, Vec2::ZERO);
        assert_eq!(rect.color, Color::CRIMSON);
    }

    #[test]
    fn test_tick_issues_commands_on_renderer() {
        let mut driver = FrameDriver::default();
        let mut rec = Recorder::new();

        rec.begin_frame().unwrap();
        let s = driver.tick(&3.0, &mut rec).unwrap();
        rec.end_frame().unwrap();

        assert_eq!(driver.last_state(), Some(s));
        assert_eq!(rec.last_frame().len(), 2);
        let rect = rec.last_rects().next().unwrap();
        assert_eq!(rect.position, vec2(0.0, 300.0));
    }

    #[test]
    fn test_tick_outside_frame_fails() {
        let mut driver = FrameDriver::default();
        let mut canvas = Canvas::new(10, 10);
        assert!(driver.tick(&0.0, &mut canvas).is_err());
        assert_eq!(driver.last_state(), None);
    }

    #[test]
    fn test_app_runs_until_renderer_closes() {
        let recorder = Rc::new(RefCell::new(Recorder::new().close_after(4)));
        let window = WindowConfig::default()
            .unlimited_fps()
            .fixed_time_step(Duration::from_millis(250));

        app(FrameSettings::from_window(&window))
            .with_window(window)
            .with_renderer(recorder.clone())
            .run()
            .unwrap();

        let rec = recorder.borrow();
        assert_eq!(rec.frame_count(), 4);
        // the fourth frame is at 0.75s
        let rect = rec.last_rects().next().unwrap();
        assert_eq!(*rect, state(0.75).to_command(&FrameSettings::default()));
        assert_eq!(rect.position, vec2(150.0, 300.0));
    }

    #[test]
    fn test_app_renders_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        let window = WindowConfig::default()
            .size(60, 60)
            .msaa(false)
            .unlimited_fps()
            .fixed_time_step(Duration::from_secs_f64(PI))
            .frame_limit(2);
        let settings = FrameSettings::from_window(&window).speed(10.0).size(10.0, 10.0);
        let canvas = Rc::new(RefCell::new(Canvas::new(1, 1).with_snapshots(dir.path(), 1)));

        app(settings)
            .with_window(window)
            .with_renderer(canvas.clone())
            .run()
            .unwrap();

        let canvas = canvas.borrow();
        assert_eq!(canvas.frame_count(), 2);
        assert!(dir.path().join("frame_00000.png").exists());
        assert!(dir.path().join("frame_00001.png").exists());

        // second frame at t=PI, x=31, the rotation is almost zero
        let red = Color::CRIMSON.to_rgba_u8();
        assert_eq!(canvas.pixel(35, 35), Some(red));
        assert_eq!(canvas.pixel(5, 35), Some(Color::BLACK.to_rgba_u8()));
    }
}
