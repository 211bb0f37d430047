pub mod theme;
pub mod window_view;

pub use theme::*;
pub use window_view::*;
