use crate::{
    app::{AppContext, CloseReason},
    backend::limiter::{FpsLimiter, LimitMode},
    builder::{AppBuilder, UpdateCb},
};

struct Runner<S> {
    state: S,
    update: UpdateCb<S>,
    ctx: AppContext,
    limiter: FpsLimiter,
    frame_limit: Option<u64>,
}

impl<S> Runner<S> {
    /// Runs one frame, returns the close reason if the loop must stop
    fn tick(&mut self) -> Result<Option<CloseReason>, String> {
        self.ctx.time.tick();

        // pre frame
        self.ctx.renderer.begin_frame()?;

        (*self.update)(&mut self.state, &mut self.ctx);

        // post frame
        self.ctx.renderer.end_frame()?;

        if self.ctx.close.is_none() && self.ctx.renderer.should_close() {
            self.ctx.close = Some(CloseReason::Renderer);
        }

        if self.ctx.close.is_none() {
            let limit_reached = self
                .frame_limit
                .is_some_and(|limit| self.ctx.frame_count() >= limit);
            if limit_reached {
                self.ctx.close = Some(CloseReason::FrameLimit);
            }
        }

        if self.ctx.close.is_none() {
            self.limiter.tick();
        }

        Ok(self.ctx.close)
    }
}

pub fn run<S>(builder: AppBuilder<S>) -> Result<(), String>
where
    S: 'static,
{
    let AppBuilder {
        window,
        mut renderer,
        init_cb,
        update_cb,
        cleanup_cb,
        ..
    } = builder;

    renderer.init(&window)?;
    log::debug!(
        "Window '{}' created: {}x{} msaa={}",
        window.title,
        window.size.x,
        window.size.y,
        window.msaa
    );

    let ctx = AppContext::new(&window, renderer);
    let limiter = FpsLimiter::new(LimitMode::from_fps(window.max_fps));

    let mut runner = Runner {
        state: init_cb(),
        update: update_cb,
        ctx,
        limiter,
        frame_limit: window.frame_limit,
    };

    // a zero frame limit closes before the first frame
    if runner.frame_limit == Some(0) {
        runner.ctx.close = Some(CloseReason::FrameLimit);
    }

    let mut result = Ok(());
    while runner.ctx.close.is_none() {
        match runner.tick() {
            Ok(Some(reason)) => {
                log::info!(
                    "Closing after {} frames ({reason:?})",
                    runner.ctx.frame_count()
                );
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("Renderer error on frame {}: {e}", runner.ctx.frame_count());
                result = Err(e);
                break;
            }
        }
    }

    // at this point the runner is not in use, the app is closing
    let Runner {
        mut state, mut ctx, ..
    } = runner;
    cleanup_cb(&mut state, &mut ctx);
    ctx.renderer.shutdown();

    result
}
