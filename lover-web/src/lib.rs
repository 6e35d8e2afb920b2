pub mod drag;
pub mod interop;
pub mod page;
pub mod popup_window;
pub mod styles;

pub use drag::*;
pub use interop::*;
pub use page::*;
pub use popup_window::*;
