mod canvas;
mod m2d;
mod recorder;

pub use canvas::*;
pub use m2d::*;
pub use recorder::*;

use corelib::app::AppContext;

// -- Draw API
#[inline]
pub fn create_draw_2d(ctx: &AppContext) -> Draw2D {
    Draw2D::new(ctx.window_size())
}
