use crate::app::{AppContext, WindowConfig};
use crate::backend::run;
use crate::gfx::{NullRenderer, Renderer};

#[cfg(feature = "logs")]
use crate::app::logger::{LogConfig, init_logs};

pub(crate) type InitCb<S> = Box<dyn FnOnce() -> S>;
pub(crate) type UpdateCb<S> = Box<dyn FnMut(&mut S, &mut AppContext)>;
pub(crate) type CleanupCb<S> = Box<dyn FnOnce(&mut S, &mut AppContext)>;

pub struct AppBuilder<S>
where
    S: 'static,
{
    pub(crate) window: WindowConfig,
    pub(crate) renderer: Box<dyn Renderer>,
    pub(crate) init_cb: InitCb<S>,
    pub(crate) update_cb: UpdateCb<S>,
    pub(crate) cleanup_cb: CleanupCb<S>,

    #[cfg(feature = "logs")]
    log_config: Option<LogConfig>,
}

pub(crate) fn builder<F, S>(cb: F) -> AppBuilder<S>
where
    F: FnOnce() -> S + 'static,
    S: 'static,
{
    AppBuilder {
        window: WindowConfig::default(),
        renderer: Box::new(NullRenderer),
        init_cb: Box::new(cb),
        update_cb: Box::new(|_, _| ()),
        cleanup_cb: Box::new(|_, _| ()),

        #[cfg(feature = "logs")]
        log_config: None,
    }
}

impl<S> AppBuilder<S>
where
    S: 'static,
{
    pub fn with_window(mut self, config: WindowConfig) -> Self {
        self.window = config;
        self
    }

    /// Surface used to draw each frame, defaults to [`NullRenderer`]
    pub fn with_renderer<R>(mut self, renderer: R) -> Self
    where
        R: Renderer + 'static,
    {
        self.renderer = Box::new(renderer);
        self
    }

    #[cfg(feature = "logs")]
    pub fn with_logs(mut self, config: LogConfig) -> Self {
        self.log_config = Some(config);
        self
    }

    pub fn update<F, P>(mut self, mut cb: F) -> Self
    where
        F: Handler<S, P> + 'static,
    {
        self.update_cb = Box::new(move |s, ctx| cb.call(s, ctx));
        self
    }

    pub fn cleanup<F, P>(mut self, mut cb: F) -> Self
    where
        F: Handler<S, P> + 'static,
    {
        self.cleanup_cb = Box::new(move |s, ctx| cb.call(s, ctx));
        self
    }

    pub fn run(self) -> Result<(), String> {
        #[cfg(feature = "logs")]
        if let Some(config) = self.log_config {
            init_logs(config);
        }

        run(self)
    }
}

pub trait Handler<S, Params> {
    fn call(&mut self, state: &mut S, ctx: &mut AppContext);
}

impl<S, Fun> Handler<S, ()> for Fun
where
    S: 'static,
    Fun: FnMut(),
{
    fn call(&mut self, _state: &mut S, _ctx: &mut AppContext) {
        (*self)();
    }
}

impl<S, Fun> Handler<S, (S,)> for Fun
where
    S: 'static,
    Fun: FnMut(&mut S),
{
    fn call(&mut self, state: &mut S, _ctx: &mut AppContext) {
        (*self)(state);
    }
}

impl<S, Fun> Handler<S, (S, AppContext)> for Fun
where
    S: 'static,
    Fun: FnMut(&mut S, &mut AppContext),
{
    fn call(&mut self, state: &mut S, ctx: &mut AppContext) {
        (*self)(state, ctx);
    }
}
