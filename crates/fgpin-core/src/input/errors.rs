use crate::errors::FgpinError;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to install keyboard intercept (error code {code}): {message}")]
    InstallFailed { code: i32, message: String },

    #[error("Failed to release keyboard intercept: {message}")]
    ReleaseFailed { message: String },

    #[error("A keyboard intercept is already installed in this process")]
    AlreadyInstalled,

    #[error("Keyboard suppression is not supported on {platform}")]
    Unsupported { platform: String },
}

impl FgpinError for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            InputError::InstallFailed { .. } => "INPUT_INSTALL_FAILED",
            InputError::ReleaseFailed { .. } => "INPUT_RELEASE_FAILED",
            InputError::AlreadyInstalled => "INPUT_ALREADY_INSTALLED",
            InputError::Unsupported { .. } => "INPUT_UNSUPPORTED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, InputError::Unsupported { .. })
    }
}
