use spinrect::frame;
use spinrect::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

// ten seconds at 60fps
const FRAMES: u64 = 600;

fn main() -> Result<(), String> {
    let window = WindowConfig::default()
        .title("Zig buildsystem example with raylib")
        .size(600, 600)
        .msaa(true)
        .max_fps(60)
        .frame_limit(FRAMES);

    let canvas = Rc::new(RefCell::new(Canvas::new(600, 600)));
    let output = canvas.clone();

    frame::app(FrameSettings::from_window(&window))
        .with_window(window)
        .with_logs(LogConfig::debug())
        .with_renderer(canvas)
        .cleanup(move |driver: &mut FrameDriver| {
            if let Some(state) = driver.last_state() {
                log::info!("Last frame: {state:?}");
            }

            let path = "target/rotating_rect.png";
            match output.borrow().save_png(path) {
                Ok(()) => log::info!("Last frame saved to '{path}'"),
                Err(e) => log::error!("{e}"),
            }
        })
        .run()
}
