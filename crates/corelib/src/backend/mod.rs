mod headless;
mod limiter;

pub(crate) use headless::run;
