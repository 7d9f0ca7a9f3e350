use crate::errors::FgpinError;
use crate::process::Pid;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Failed to find main window for the process (PID: {pid}) after {attempts} attempts")]
    NotFound { pid: Pid, attempts: u32 },

    #[error("Failed to enumerate windows: {message}")]
    EnumerationFailed { message: String },

    #[error("Window management is not supported on {platform}")]
    Unsupported { platform: String },
}

impl WindowError {
    /// Whether polling again might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, WindowError::EnumerationFailed { .. })
    }
}

impl FgpinError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::NotFound { .. } => "WINDOW_NOT_FOUND",
            WindowError::EnumerationFailed { .. } => "WINDOW_ENUMERATION_FAILED",
            WindowError::Unsupported { .. } => "WINDOW_UNSUPPORTED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            WindowError::NotFound { .. } | WindowError::Unsupported { .. }
        )
    }
}
