use crate::config::types::FgpinConfig;
use crate::errors::ConfigError;

/// Upper bound on the window attempt budget.
pub const MAX_WINDOW_ATTEMPTS: u32 = 100_000;

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidConfiguration {
        message: message.into(),
    }
}

/// Validate a (possibly merged) configuration.
///
/// Attempt budgets must be at least 1 and intervals non-zero, so every
/// polling loop ends and none of them spins. `input_idle_timeout_ms = 0`
/// is allowed and skips the wait.
pub fn validate_config(config: &FgpinConfig) -> Result<(), ConfigError> {
    if let Some(attempts) = config.window.max_attempts {
        if attempts == 0 {
            return Err(invalid("window.max_attempts must be at least 1"));
        }
        if attempts > MAX_WINDOW_ATTEMPTS {
            return Err(invalid(format!(
                "window.max_attempts must be at most {}, got {}",
                MAX_WINDOW_ATTEMPTS, attempts
            )));
        }
    }

    if config.foreground.bypass_attempts == Some(0) {
        return Err(invalid("foreground.bypass_attempts must be at least 1"));
    }

    let intervals = [
        ("window.poll_interval_ms", config.window.poll_interval_ms),
        (
            "foreground.bypass_interval_ms",
            config.foreground.bypass_interval_ms,
        ),
        (
            "foreground.maintain_interval_ms",
            config.foreground.maintain_interval_ms,
        ),
    ];
    for (name, value) in intervals {
        if value == Some(0) {
            return Err(invalid(format!("{} must be greater than 0", name)));
        }
    }

    Ok(())
}
