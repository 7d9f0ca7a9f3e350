//! Default values for configuration and the `PinPolicy` they resolve to.

use std::time::Duration;

use crate::config::types::{FgpinConfig, PinPolicy};
use crate::input::SuppressionMode;

/// 100 enumerations at 100ms gives roughly ten seconds for a window to show up.
pub const DEFAULT_WINDOW_MAX_ATTEMPTS: u32 = 100;
pub const DEFAULT_WINDOW_POLL_INTERVAL_MS: u64 = 100;
pub const DEFAULT_BYPASS: bool = true;
pub const DEFAULT_BYPASS_ATTEMPTS: u32 = 10;
pub const DEFAULT_BYPASS_INTERVAL_MS: u64 = 300;
pub const DEFAULT_EXTRA_ASSURANCE_ATTEMPTS: u32 = 0;
pub const DEFAULT_MAINTAIN: bool = true;
pub const DEFAULT_MAINTAIN_INTERVAL_MS: u64 = 500;
pub const DEFAULT_INPUT_IDLE_TIMEOUT_MS: u64 = 10_000;

impl Default for PinPolicy {
    fn default() -> Self {
        FgpinConfig::default().policy()
    }
}

impl FgpinConfig {
    /// Resolve every unset field to its default.
    pub fn policy(&self) -> PinPolicy {
        let window = &self.window;
        let fg = &self.foreground;

        PinPolicy {
            window_max_attempts: window.max_attempts.unwrap_or(DEFAULT_WINDOW_MAX_ATTEMPTS),
            window_poll_interval: Duration::from_millis(
                window
                    .poll_interval_ms
                    .unwrap_or(DEFAULT_WINDOW_POLL_INTERVAL_MS),
            ),
            bypass: fg.bypass.unwrap_or(DEFAULT_BYPASS),
            bypass_attempts: fg.bypass_attempts.unwrap_or(DEFAULT_BYPASS_ATTEMPTS),
            bypass_interval: Duration::from_millis(
                fg.bypass_interval_ms.unwrap_or(DEFAULT_BYPASS_INTERVAL_MS),
            ),
            extra_assurance_attempts: fg
                .extra_assurance_attempts
                .unwrap_or(DEFAULT_EXTRA_ASSURANCE_ATTEMPTS),
            maintain: fg.maintain.unwrap_or(DEFAULT_MAINTAIN),
            maintain_interval: Duration::from_millis(
                fg.maintain_interval_ms
                    .unwrap_or(DEFAULT_MAINTAIN_INTERVAL_MS),
            ),
            suppression: self.input.suppression.unwrap_or(SuppressionMode::Off),
            input_idle_timeout: Duration::from_millis(
                self.process
                    .input_idle_timeout_ms
                    .unwrap_or(DEFAULT_INPUT_IDLE_TIMEOUT_MS),
            ),
        }
    }
}
