pub mod date_entry;
pub mod date_window;
pub mod error;
pub mod saved_set;

pub use date_entry::*;
pub use date_window::*;
pub use error::*;
pub use saved_set::*;
