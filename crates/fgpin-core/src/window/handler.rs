use tracing::{debug, info, warn};

use crate::config::PinPolicy;
use crate::platform::Desktop;
use crate::process::Pid;
use crate::window::errors::WindowError;
use crate::window::operations::find_main_window;
use crate::window::types::WindowHandle;

/// Poll for the main window of `pid`.
///
/// Makes exactly `policy.window_max_attempts` enumerations, sleeping
/// `policy.window_poll_interval` between them (not after the last).
/// Retryable enumeration failures count as a miss; anything else is
/// returned immediately.
pub fn locate_main_window(
    desktop: &dyn Desktop,
    pid: Pid,
    policy: &PinPolicy,
) -> Result<WindowHandle, WindowError> {
    let max_attempts = policy.window_max_attempts;

    info!(
        event = "core.window.locate_started",
        pid = pid.as_u32(),
        max_attempts = max_attempts,
        poll_interval_ms = policy.window_poll_interval.as_millis() as u64
    );

    for attempt in 1..=max_attempts {
        match desktop.top_level_windows() {
            Ok(windows) => {
                if let Some(handle) = find_main_window(&windows, pid) {
                    info!(
                        event = "core.window.locate_completed",
                        pid = pid.as_u32(),
                        window = %handle,
                        attempts = attempt
                    );
                    return Ok(handle);
                }
            }
            Err(e) if e.is_retryable() => {
                debug!(
                    event = "core.window.enumeration_retry",
                    pid = pid.as_u32(),
                    attempt = attempt,
                    error = %e
                );
            }
            Err(e) => {
                warn!(
                    event = "core.window.locate_failed",
                    pid = pid.as_u32(),
                    error = %e
                );
                return Err(e);
            }
        }

        if attempt < max_attempts {
            desktop.sleep(policy.window_poll_interval);
        }
    }

    warn!(
        event = "core.window.locate_exhausted",
        pid = pid.as_u32(),
        attempts = max_attempts
    );

    Err(WindowError::NotFound {
        pid,
        attempts: max_attempts,
    })
}
