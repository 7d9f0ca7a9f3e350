use tracing::{error, info};

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        platform = std::env::consts::OS
    );
}

/// `pinned` is false when the run ended on an error (exit code 1).
pub fn log_app_shutdown(pinned: bool) {
    info!(event = "core.app.shutdown_started", pinned = pinned);
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}
