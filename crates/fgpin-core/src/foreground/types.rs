/// How the initial takeover ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForegroundOutcome {
    /// The OS reported the target as the foreground window.
    Confirmed { attempts: u32 },
    /// Every attempt was made but the OS never confirmed the switch.
    Unconfirmed { attempts: u32 },
    /// The window was destroyed before or during the takeover.
    WindowLost { attempts: u32 },
}

impl ForegroundOutcome {
    pub fn attempts(&self) -> u32 {
        match self {
            ForegroundOutcome::Confirmed { attempts }
            | ForegroundOutcome::Unconfirmed { attempts }
            | ForegroundOutcome::WindowLost { attempts } => *attempts,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, ForegroundOutcome::Confirmed { .. })
    }

    pub fn is_window_lost(&self) -> bool {
        matches!(self, ForegroundOutcome::WindowLost { .. })
    }
}

/// Why the maintenance loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceStop {
    /// The target process is no longer running.
    ProcessExited,
    /// The window handle stopped referring to a live window.
    WindowLost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaintenanceOutcome {
    pub stop: MaintenanceStop,
    /// Number of foreground requests issued while maintaining.
    pub assertions: u64,
}
