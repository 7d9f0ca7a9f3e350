use std::path::Path;

use tracing::{info, warn};

use crate::config::PinPolicy;
use crate::platform::Desktop;
use crate::process::errors::ProcessError;
use crate::process::operations::extract_base_name;
use crate::process::types::{InputIdle, ProcessOrigin, ResolvedProcess};

/// Determine a live process for the executable at `path`.
///
/// Reuses a running process with the same base name (case-insensitive) when
/// there is one. Otherwise launches exactly one new process and waits, up to
/// `policy.input_idle_timeout`, for it to finish starting. Note that this
/// may start a process: resolution is only idempotent while the target runs.
pub fn resolve_process(
    desktop: &dyn Desktop,
    path: &Path,
    policy: &PinPolicy,
) -> Result<ResolvedProcess, ProcessError> {
    let path_str = path.to_string_lossy();
    let base_name = extract_base_name(&path_str)
        .ok_or_else(|| ProcessError::InvalidPath {
            path: path.to_path_buf(),
        })?
        .to_string();

    info!(
        event = "core.process.resolve_started",
        path = %path.display(),
        base_name = %base_name
    );

    if let Some(pid) = desktop.find_process(&base_name) {
        info!(
            event = "core.process.resolve_completed",
            pid = pid.as_u32(),
            origin = "discovered"
        );
        return Ok(ResolvedProcess {
            pid,
            base_name,
            origin: ProcessOrigin::Discovered,
        });
    }

    let pid = desktop.launch(path).inspect_err(|e| {
        warn!(
            event = "core.process.launch_failed",
            path = %path.display(),
            error = %e
        );
    })?;

    info!(event = "core.process.launch_completed", pid = pid.as_u32());

    let input_idle = if policy.input_idle_timeout.is_zero() {
        InputIdle::Skipped
    } else {
        desktop.wait_for_input_idle(pid, policy.input_idle_timeout)
    };

    if input_idle == InputIdle::TimedOut {
        warn!(
            event = "core.process.input_idle_timed_out",
            pid = pid.as_u32(),
            timeout_ms = policy.input_idle_timeout.as_millis() as u64
        );
    }

    info!(
        event = "core.process.resolve_completed",
        pid = pid.as_u32(),
        origin = "launched",
        input_idle = ?input_idle
    );

    Ok(ResolvedProcess {
        pid,
        base_name,
        origin: ProcessOrigin::Launched { input_idle },
    })
}
