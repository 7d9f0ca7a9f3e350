use std::path::Path;
use std::time::Duration;

use tracing::debug;

use super::native;
use super::traits::{Desktop, KeyboardIntercept};
use crate::input::{InputError, SuppressionMode};
use crate::process::{self, InputIdle, Pid, ProcessError};
use crate::window::{WindowError, WindowHandle, WindowSnapshot};

/// The desktop of the machine this process runs on.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDesktop;

impl SystemDesktop {
    pub fn new() -> Self {
        Self
    }
}

impl Desktop for SystemDesktop {
    fn find_process(&self, base_name: &str) -> Option<Pid> {
        process::find_process_by_base_name(base_name)
    }

    fn launch(&self, path: &Path) -> Result<Pid, ProcessError> {
        process::launch_process(path)
    }

    fn wait_for_input_idle(&self, pid: Pid, timeout: Duration) -> InputIdle {
        let result = native::wait_for_input_idle(pid, timeout);
        debug!(
            event = "core.platform.input_idle_completed",
            pid = pid.as_u32(),
            result = ?result
        );
        result
    }

    fn is_process_alive(&self, pid: Pid) -> bool {
        native::is_process_alive(pid)
    }

    fn top_level_windows(&self) -> Result<Vec<WindowSnapshot>, WindowError> {
        native::top_level_windows()
    }

    fn is_window(&self, window: WindowHandle) -> bool {
        native::is_window(window)
    }

    fn foreground_window(&self) -> Option<WindowHandle> {
        native::foreground_window()
    }

    fn set_foreground(&self, window: WindowHandle) -> bool {
        native::set_foreground(window)
    }

    fn force_foreground(&self, window: WindowHandle) -> bool {
        native::force_foreground(window)
    }

    fn install_keyboard_intercept(
        &self,
        mode: SuppressionMode,
    ) -> Result<Box<dyn KeyboardIntercept>, InputError> {
        native::install_keyboard_intercept(mode)
    }
}
