use std::fmt;

use sysinfo::Pid as SysinfoPid;

/// Platform-safe process ID wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pid(u32);

impl Pid {
    pub fn from_raw(pid: u32) -> Self {
        Self(pid)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn to_sysinfo_pid(&self) -> SysinfoPid {
        SysinfoPid::from_u32(self.0)
    }
}

impl From<u32> for Pid {
    fn from(pid: u32) -> Self {
        Self(pid)
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of waiting for a freshly launched process to finish startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIdle {
    /// The process reached its idle input loop.
    Ready,
    /// The wait budget ran out first.
    TimedOut,
    /// The wait was disabled by configuration.
    Skipped,
    /// The wait could not be performed (console process, no handle, or no
    /// platform support). Not an error.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOrigin {
    /// A process with the same executable name was already running.
    Discovered,
    /// No match was running, so one was launched.
    Launched { input_idle: InputIdle },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProcess {
    pub pid: Pid,
    pub base_name: String,
    pub origin: ProcessOrigin,
}

impl ResolvedProcess {
    pub fn was_launched(&self) -> bool {
        matches!(self.origin, ProcessOrigin::Launched { .. })
    }
}
