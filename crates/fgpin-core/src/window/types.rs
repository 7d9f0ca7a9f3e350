use std::fmt;

use crate::process::Pid;

/// Opaque top-level window handle (the raw HWND value on Windows).
///
/// The window behind a handle can be destroyed at any time, and its value
/// reused; never assume one found earlier is still valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(isize);

impl WindowHandle {
    pub fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    pub fn as_raw(&self) -> isize {
        self.0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// What the OS reported about one top-level window during an enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSnapshot {
    pub handle: WindowHandle,
    pub owner_pid: Pid,
    pub visible: bool,
    /// Whether the window has an owner window (tool windows, dialogs).
    pub has_owner: bool,
}
