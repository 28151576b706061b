use spinrect::frame;
use spinrect::prelude::*;

fn main() -> Result<(), String> {
    let driver = FrameDriver::default();

    println!("{:>6} {:>6} {:>6} {:>9}", "t", "x", "y", "rot");
    (0..=16).map(|i| i as f64 * 0.25).for_each(|t| {
        let s = driver.state(&t);
        println!(
            "{:>6.2} {:>6} {:>6} {:>9.3}",
            t, s.position.x, s.position.y, s.rotation
        );
    });

    // same animation through the app loop, recording five frames
    let window = WindowConfig::default()
        .unlimited_fps()
        .fixed_time_step(Duration::from_millis(500));

    frame::app(FrameSettings::from_window(&window))
        .with_window(window)
        .with_logs(LogConfig::trace())
        .with_renderer(Recorder::new().close_after(5))
        .cleanup(|driver: &mut FrameDriver, ctx: &mut AppContext| {
            log::info!(
                "Recorded {} frames, closed by {:?}, last state {:?}",
                ctx.frame_count(),
                ctx.close_reason(),
                driver.last_state()
            );
        })
        .run()
}
