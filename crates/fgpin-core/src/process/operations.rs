use std::path::Path;
use std::process::Command;

use sysinfo::{ProcessesToUpdate, System};
use tracing::debug;

use crate::process::errors::ProcessError;
use crate::process::types::Pid;

/// Extract the base name from a path, handling both Unix (/) and Windows (\) separators
pub fn extract_base_name(path: &str) -> Option<&str> {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    if name.is_empty() { None } else { Some(name) }
}

/// Case-insensitive comparison of two executable base names
pub fn base_name_matches(actual: &str, expected: &str) -> bool {
    actual.to_lowercase() == expected.to_lowercase()
}

/// Check if a process with the given PID is currently running
pub fn is_process_running(pid: Pid) -> bool {
    let mut system = System::new();
    let pid_obj = pid.to_sysinfo_pid();
    system.refresh_processes(ProcessesToUpdate::Some(&[pid_obj]), true);
    system.process(pid_obj).is_some()
}

/// Find a running process whose executable base name matches `base_name`.
///
/// Both the reported process name and the file name of its executable path
/// are checked, since some platforms truncate the former. When several
/// processes match, the one that started first wins (ties broken by PID).
/// The calling process is never returned.
pub fn find_process_by_base_name(base_name: &str) -> Option<Pid> {
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::All, true);

    let self_pid = std::process::id();

    system
        .processes()
        .iter()
        .filter(|(pid, _)| pid.as_u32() != self_pid)
        .filter(|(_, process)| {
            let name = process.name().to_string_lossy();
            if base_name_matches(&name, base_name) {
                return true;
            }
            process
                .exe()
                .and_then(|exe| exe.file_name())
                .is_some_and(|file| base_name_matches(&file.to_string_lossy(), base_name))
        })
        .min_by_key(|(pid, process)| (process.start_time(), pid.as_u32()))
        .map(|(pid, process)| {
            debug!(
                event = "core.process.match_found",
                pid = pid.as_u32(),
                name = %process.name().to_string_lossy(),
                base_name = base_name
            );
            Pid::from_raw(pid.as_u32())
        })
}

/// Launch the executable at `path` with default creation flags.
///
/// The child is detached: dropping the handle neither waits for nor kills it.
pub fn launch_process(path: &Path) -> Result<Pid, ProcessError> {
    match Command::new(path).spawn() {
        Ok(child) => Ok(Pid::from_raw(child.id())),
        Err(e) => Err(ProcessError::LaunchFailed {
            path: path.to_path_buf(),
            code: e.raw_os_error(),
            message: e.to_string(),
        }),
    }
}
