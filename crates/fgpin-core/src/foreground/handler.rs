use tracing::{debug, info, warn};

use crate::config::PinPolicy;
use crate::foreground::types::{ForegroundOutcome, MaintenanceOutcome, MaintenanceStop};
use crate::platform::Desktop;
use crate::process::Pid;
use crate::window::WindowHandle;

fn is_foreground(desktop: &dyn Desktop, window: WindowHandle) -> bool {
    desktop.foreground_window() == Some(window)
}

/// Make `window` the foreground window.
///
/// With `policy.bypass` the focus-stealing workaround is retried up to
/// `bypass_attempts` times until the OS confirms the switch; otherwise a
/// single plain request is made. `extra_assurance_attempts` plain requests
/// follow either way. The handle is re-validated before every request.
pub fn enforce_foreground(
    desktop: &dyn Desktop,
    window: WindowHandle,
    policy: &PinPolicy,
) -> ForegroundOutcome {
    info!(
        event = "core.foreground.enforce_started",
        window = %window,
        bypass = policy.bypass,
        max_attempts = policy.bypass_attempts
    );

    let outcome = if policy.bypass {
        enforce_with_bypass(desktop, window, policy)
    } else {
        enforce_plain(desktop, window)
    };

    if outcome.is_window_lost() {
        warn!(event = "core.foreground.window_lost", window = %window);
        return outcome;
    }

    let outcome = extra_assurance(desktop, window, policy, outcome);

    match outcome {
        ForegroundOutcome::Confirmed { attempts } => info!(
            event = "core.foreground.enforce_completed",
            window = %window,
            attempts = attempts
        ),
        ForegroundOutcome::Unconfirmed { attempts } => warn!(
            event = "core.foreground.enforce_unconfirmed",
            window = %window,
            attempts = attempts
        ),
        ForegroundOutcome::WindowLost { .. } => {
            warn!(event = "core.foreground.window_lost", window = %window)
        }
    }

    outcome
}

fn enforce_with_bypass(
    desktop: &dyn Desktop,
    window: WindowHandle,
    policy: &PinPolicy,
) -> ForegroundOutcome {
    for attempt in 1..=policy.bypass_attempts {
        if !desktop.is_window(window) {
            return ForegroundOutcome::WindowLost {
                attempts: attempt - 1,
            };
        }

        let accepted = desktop.force_foreground(window);
        if is_foreground(desktop, window) {
            return ForegroundOutcome::Confirmed { attempts: attempt };
        }

        debug!(
            event = "core.foreground.attempt_unconfirmed",
            window = %window,
            attempt = attempt,
            accepted = accepted
        );

        if attempt < policy.bypass_attempts {
            desktop.sleep(policy.bypass_interval);
        }
    }

    ForegroundOutcome::Unconfirmed {
        attempts: policy.bypass_attempts,
    }
}

fn enforce_plain(desktop: &dyn Desktop, window: WindowHandle) -> ForegroundOutcome {
    if !desktop.is_window(window) {
        return ForegroundOutcome::WindowLost { attempts: 0 };
    }

    desktop.set_foreground(window);
    if is_foreground(desktop, window) {
        ForegroundOutcome::Confirmed { attempts: 1 }
    } else {
        ForegroundOutcome::Unconfirmed { attempts: 1 }
    }
}

/// Additional plain requests after the main takeover. Can upgrade an
/// unconfirmed outcome, never downgrades a confirmed one.
fn extra_assurance(
    desktop: &dyn Desktop,
    window: WindowHandle,
    policy: &PinPolicy,
    outcome: ForegroundOutcome,
) -> ForegroundOutcome {
    let mut attempts = outcome.attempts();
    let mut confirmed = outcome.is_confirmed();

    for _ in 0..policy.extra_assurance_attempts {
        desktop.sleep(policy.bypass_interval);
        if !desktop.is_window(window) {
            if confirmed {
                // Already in front once; losing it now is the maintenance loop's concern.
                break;
            }
            return ForegroundOutcome::WindowLost { attempts };
        }
        desktop.set_foreground(window);
        attempts += 1;
        confirmed = confirmed || is_foreground(desktop, window);
    }

    if confirmed {
        ForegroundOutcome::Confirmed { attempts }
    } else {
        ForegroundOutcome::Unconfirmed { attempts }
    }
}

/// Keep `window` in the foreground until the process exits or the window goes away.
///
/// Liveness is checked before every request, so no request is issued for a
/// dead target and the loop ends within one `maintain_interval` of the target
/// going away.
pub fn maintain_foreground(
    desktop: &dyn Desktop,
    pid: Pid,
    window: WindowHandle,
    policy: &PinPolicy,
) -> MaintenanceOutcome {
    info!(
        event = "core.foreground.maintain_started",
        pid = pid.as_u32(),
        window = %window,
        interval_ms = policy.maintain_interval.as_millis() as u64
    );

    let mut assertions: u64 = 0;

    let stop = loop {
        if !desktop.is_window(window) {
            break MaintenanceStop::WindowLost;
        }
        if !desktop.is_process_alive(pid) {
            break MaintenanceStop::ProcessExited;
        }

        desktop.set_foreground(window);
        assertions += 1;

        desktop.sleep(policy.maintain_interval);
    };

    info!(
        event = "core.foreground.maintain_completed",
        pid = pid.as_u32(),
        window = %window,
        stop = ?stop,
        assertions = assertions
    );

    MaintenanceOutcome { stop, assertions }
}
