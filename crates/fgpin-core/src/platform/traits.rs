//! Desktop trait definition.

use std::path::Path;
use std::time::Duration;

use crate::input::{InputError, SuppressionMode};
use crate::process::{InputIdle, Pid, ProcessError};
use crate::window::{WindowError, WindowHandle, WindowSnapshot};

/// Everything the pin pipeline needs from the operating system.
///
/// Window handles returned from here can go stale at any moment; callers
/// re-check [`Desktop::is_window`] before acting on one.
pub trait Desktop {
    /// Find a running process whose executable base name matches, ignoring case.
    fn find_process(&self, base_name: &str) -> Option<Pid>;

    /// Start a new process from `path` with default creation flags.
    fn launch(&self, path: &Path) -> Result<Pid, ProcessError>;

    /// Block until a freshly launched process is waiting for input, or `timeout` passes.
    fn wait_for_input_idle(&self, pid: Pid, timeout: Duration) -> InputIdle;

    fn is_process_alive(&self, pid: Pid) -> bool;

    /// Top-level windows in Z-order, front to back.
    fn top_level_windows(&self) -> Result<Vec<WindowSnapshot>, WindowError>;

    fn is_window(&self, window: WindowHandle) -> bool;

    fn foreground_window(&self) -> Option<WindowHandle>;

    /// Plain foreground request. Returns whether the OS accepted it.
    fn set_foreground(&self, window: WindowHandle) -> bool;

    /// Foreground request that works around focus-stealing prevention by
    /// attaching to the target's input thread and restoring it if minimized.
    fn force_foreground(&self, window: WindowHandle) -> bool;

    /// Install a system-wide keyboard intercept discarding keys per `mode`.
    fn install_keyboard_intercept(
        &self,
        mode: SuppressionMode,
    ) -> Result<Box<dyn KeyboardIntercept>, InputError>;

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// An installed keyboard intercept. Releasing consumes it, so it can only be
/// uninstalled once.
pub trait KeyboardIntercept {
    fn release(self: Box<Self>) -> Result<(), InputError>;
}
