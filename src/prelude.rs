pub use crate::frame::{FrameDriver, FrameSettings, FrameState};

pub use corelib::app::{AppContext, CloseReason, WindowConfig};
#[cfg(feature = "logs")]
pub use corelib::app::LogConfig;
pub use corelib::gfx::{AsCommands, Color, DrawCommand, NullRenderer, RectCommand, Renderer};
pub use corelib::math::{Mat3, Rect, UVec2, Vec2, uvec2, vec2};
pub use corelib::time::{Duration, Time, TimeSource, TimeStep};
pub use draw::{Canvas, Draw2D, Recorder, create_draw_2d};
