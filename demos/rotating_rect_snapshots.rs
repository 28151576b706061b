use spinrect::frame;
use spinrect::prelude::*;

fn main() -> Result<(), String> {
    // deterministic clock, 4 seconds at 60fps rendered as fast as possible
    let window = WindowConfig::default()
        .title("spinrect snapshots")
        .unlimited_fps()
        .fixed_time_step(Duration::from_secs_f64(1.0 / 60.0))
        .frame_limit(240);

    let canvas = Canvas::new(600, 600).with_snapshots("target/spinrect-frames", 30);

    frame::app(FrameSettings::from_window(&window))
        .with_window(window)
        .with_logs(LogConfig::debug())
        .with_renderer(canvas)
        .run()
}
