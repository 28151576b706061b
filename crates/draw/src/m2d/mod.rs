mod draw_2d;
mod shapes;

pub use draw_2d::*;
pub use shapes::*;
