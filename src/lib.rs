pub mod frame;
pub mod prelude;

#[doc(inline)]
pub use corelib::*;

#[doc(inline)]
pub use draw;

#[doc(inline)]
pub use utils;
