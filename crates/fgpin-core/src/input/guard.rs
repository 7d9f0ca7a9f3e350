use tracing::{info, warn};

use crate::input::types::SuppressionMode;
use crate::platform::{Desktop, KeyboardIntercept};

/// Owns an installed keyboard intercept for the duration of a takeover.
///
/// The intercept is released exactly once: either through [`release`] or,
/// on any other exit path (early `?` returns, panics), when the guard drops.
/// A leaked intercept would lock the user out of the keyboard system-wide.
///
/// [`release`]: InputSuppression::release
pub struct InputSuppression {
    mode: SuppressionMode,
    intercept: Option<Box<dyn KeyboardIntercept>>,
}

impl InputSuppression {
    /// Install an intercept for `mode` through `desktop`.
    ///
    /// `SuppressionMode::Off` installs nothing. An install failure is logged
    /// and yields an inactive guard; the takeover proceeds without suppression.
    pub fn acquire(desktop: &dyn Desktop, mode: SuppressionMode) -> Self {
        if !mode.is_enabled() {
            return Self::inactive(mode);
        }

        match desktop.install_keyboard_intercept(mode) {
            Ok(intercept) => {
                info!(event = "core.input.suppression_installed", mode = %mode);
                Self {
                    mode,
                    intercept: Some(intercept),
                }
            }
            Err(e) => {
                warn!(
                    event = "core.input.suppression_install_failed",
                    mode = %mode,
                    error = %e,
                    "Continuing without keyboard suppression"
                );
                Self::inactive(mode)
            }
        }
    }

    fn inactive(mode: SuppressionMode) -> Self {
        Self {
            mode,
            intercept: None,
        }
    }

    pub fn mode(&self) -> SuppressionMode {
        self.mode
    }

    /// Whether an intercept is currently installed.
    pub fn is_active(&self) -> bool {
        self.intercept.is_some()
    }

    /// Release the intercept now. Returns whether one was installed.
    pub fn release(mut self) -> bool {
        self.release_inner()
    }

    fn release_inner(&mut self) -> bool {
        let Some(intercept) = self.intercept.take() else {
            return false;
        };

        match intercept.release() {
            Ok(()) => info!(event = "core.input.suppression_released", mode = %self.mode),
            Err(e) => warn!(
                event = "core.input.suppression_release_failed",
                mode = %self.mode,
                error = %e
            ),
        }
        true
    }
}

impl Drop for InputSuppression {
    fn drop(&mut self) {
        self.release_inner();
    }
}

impl std::fmt::Debug for InputSuppression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputSuppression")
            .field("mode", &self.mode)
            .field("active", &self.is_active())
            .finish()
    }
}
