use std::path::PathBuf;

use crate::config::PinPolicy;
use crate::foreground::{ForegroundOutcome, MaintenanceOutcome};
use crate::input::SuppressionMode;
use crate::process::ResolvedProcess;
use crate::window::WindowHandle;

#[derive(Debug, Clone)]
pub struct PinRequest {
    pub executable: PathBuf,
    pub policy: PinPolicy,
}

impl PinRequest {
    pub fn new(executable: impl Into<PathBuf>, policy: PinPolicy) -> Self {
        Self {
            executable: executable.into(),
            policy,
        }
    }
}

/// Progress notifications, in pipeline order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinEvent {
    SuppressionStarted { mode: SuppressionMode },
    ProcessResolved(ResolvedProcess),
    WindowLocated { window: WindowHandle },
    Foreground(ForegroundOutcome),
    SuppressionEnded { mode: SuppressionMode },
    Maintenance(MaintenanceOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinReport {
    pub process: ResolvedProcess,
    pub window: WindowHandle,
    pub foreground: ForegroundOutcome,
    /// `None` when maintenance was disabled or the window was already gone.
    pub maintenance: Option<MaintenanceOutcome>,
    /// Whether keyboard suppression was actually in effect during the takeover.
    pub suppression_active: bool,
}
