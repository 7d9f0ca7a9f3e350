use std::path::PathBuf;

use crate::errors::FgpinError;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Invalid executable path '{}': no file name", path.display())]
    InvalidPath { path: PathBuf },

    #[error("Failed to launch process. Error code: {}", display_code(code))]
    LaunchFailed {
        path: PathBuf,
        code: Option<i32>,
        message: String,
    },
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "unknown".to_string(),
    }
}

impl FgpinError for ProcessError {
    fn error_code(&self) -> &'static str {
        match self {
            ProcessError::InvalidPath { .. } => "PROCESS_INVALID_PATH",
            ProcessError::LaunchFailed { .. } => "PROCESS_LAUNCH_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ProcessError::InvalidPath { .. })
    }
}
