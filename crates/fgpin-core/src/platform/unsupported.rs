//! Fallback for platforms without a window backend.
//!
//! Process liveness still works through sysinfo; everything window or input
//! related reports that it is unavailable.

use std::time::Duration;

use crate::input::{InputError, SuppressionMode};
use crate::platform::KeyboardIntercept;
use crate::process::{self, InputIdle, Pid};
use crate::window::{WindowError, WindowHandle, WindowSnapshot};

const PLATFORM: &str = std::env::consts::OS;

pub(super) fn wait_for_input_idle(_pid: Pid, _timeout: Duration) -> InputIdle {
    InputIdle::Unavailable
}

pub(super) fn is_process_alive(pid: Pid) -> bool {
    process::is_process_running(pid)
}

pub(super) fn top_level_windows() -> Result<Vec<WindowSnapshot>, WindowError> {
    Err(WindowError::Unsupported {
        platform: PLATFORM.to_string(),
    })
}

pub(super) fn is_window(_window: WindowHandle) -> bool {
    false
}

pub(super) fn foreground_window() -> Option<WindowHandle> {
    None
}

pub(super) fn set_foreground(_window: WindowHandle) -> bool {
    false
}

pub(super) fn force_foreground(_window: WindowHandle) -> bool {
    false
}

pub(super) fn install_keyboard_intercept(
    _mode: SuppressionMode,
) -> Result<Box<dyn KeyboardIntercept>, InputError> {
    Err(InputError::Unsupported {
        platform: PLATFORM.to_string(),
    })
}
