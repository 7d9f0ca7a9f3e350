pub mod errors;
pub mod handler;
pub mod operations;
pub mod types;

pub use errors::WindowError;
pub use handler::locate_main_window;
pub use operations::{find_main_window, is_main_window_of};
pub use types::{WindowHandle, WindowSnapshot};
