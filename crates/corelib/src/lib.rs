pub mod app;
mod backend;
mod builder;
pub mod gfx;
pub mod math;
pub mod time;

pub use crate::builder::{AppBuilder, Handler};

use crate::builder::builder;

pub fn init_with<F, S>(callback: F) -> AppBuilder<S>
where
    F: FnOnce() -> S + 'static,
    S: 'static,
{
    builder(callback)
}

pub fn init() -> AppBuilder<()> {
    init_with(|| ())
}
