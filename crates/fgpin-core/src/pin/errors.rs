use crate::errors::FgpinError;
use crate::process::ProcessError;
use crate::window::WindowError;

#[derive(Debug, thiserror::Error)]
pub enum PinError {
    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    Window(#[from] WindowError),
}

impl FgpinError for PinError {
    fn error_code(&self) -> &'static str {
        match self {
            PinError::Process(e) => e.error_code(),
            PinError::Window(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            PinError::Process(e) => e.is_user_error(),
            PinError::Window(e) => e.is_user_error(),
        }
    }
}
