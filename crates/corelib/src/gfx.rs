mod color;
mod command;
mod renderer;

pub use color::*;
pub use command::*;
pub use renderer::*;
