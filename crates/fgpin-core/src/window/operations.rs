use crate::process::Pid;
use crate::window::types::{WindowHandle, WindowSnapshot};

/// A process's main window is visible, unowned, and belongs to it.
pub fn is_main_window_of(window: &WindowSnapshot, pid: Pid) -> bool {
    window.owner_pid == pid && window.visible && !window.has_owner
}

/// First main window for `pid` in enumeration order.
pub fn find_main_window(windows: &[WindowSnapshot], pid: Pid) -> Option<WindowHandle> {
    windows
        .iter()
        .find(|w| is_main_window_of(w, pid))
        .map(|w| w.handle)
}
