use tracing::info;

use crate::foreground::{enforce_foreground, maintain_foreground};
use crate::input::InputSuppression;
use crate::pin::errors::PinError;
use crate::pin::types::{PinEvent, PinReport, PinRequest};
use crate::platform::Desktop;
use crate::process::resolve_process;
use crate::window::locate_main_window;

/// Run the whole takeover: resolve, locate, enforce, then maintain.
///
/// Keyboard suppression (if configured) covers resolve through enforce and
/// is released before maintenance starts, or on the way out of any failure.
/// A window that disappears is not an error; it just ends the run early.
pub fn pin_target(
    desktop: &dyn Desktop,
    request: &PinRequest,
    on_event: &mut dyn FnMut(&PinEvent),
) -> Result<PinReport, PinError> {
    let policy = &request.policy;

    info!(
        event = "core.pin.run_started",
        executable = %request.executable.display(),
        suppression = %policy.suppression,
        maintain = policy.maintain
    );

    let suppression = InputSuppression::acquire(desktop, policy.suppression);
    let suppression_active = suppression.is_active();
    if suppression_active {
        on_event(&PinEvent::SuppressionStarted {
            mode: suppression.mode(),
        });
    }

    let process = resolve_process(desktop, &request.executable, policy)?;
    on_event(&PinEvent::ProcessResolved(process.clone()));

    let window = locate_main_window(desktop, process.pid, policy)?;
    on_event(&PinEvent::WindowLocated { window });

    let foreground = enforce_foreground(desktop, window, policy);
    on_event(&PinEvent::Foreground(foreground));

    let mode = suppression.mode();
    if suppression.release() {
        on_event(&PinEvent::SuppressionEnded { mode });
    }

    let maintenance = if policy.maintain && !foreground.is_window_lost() {
        let outcome = maintain_foreground(desktop, process.pid, window, policy);
        on_event(&PinEvent::Maintenance(outcome));
        Some(outcome)
    } else {
        None
    };

    info!(
        event = "core.pin.run_completed",
        pid = process.pid.as_u32(),
        window = %window,
        confirmed = foreground.is_confirmed()
    );

    Ok(PinReport {
        process,
        window,
        foreground,
        maintenance,
        suppression_active,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::PinPolicy;
    use crate::foreground::{ForegroundOutcome, MaintenanceStop};
    use crate::input::SuppressionMode;
    use crate::process::{InputIdle, Pid, ProcessError, ProcessOrigin};
    use crate::window::{WindowError, WindowHandle};
    use crate::platform::fake::FakeDesktop;

    const NOTEPAD: &str = r"C:\Apps\Notepad.exe";
    const PID: u32 = 4100;
    const HWND: isize = 0x1F00;

    fn request(policy: PinPolicy) -> PinRequest {
        PinRequest::new(NOTEPAD, policy)
    }

    fn suppressing(mode: SuppressionMode) -> PinPolicy {
        PinPolicy {
            suppression: mode,
            ..PinPolicy::default()
        }
    }

    fn run(desktop: &FakeDesktop, request: &PinRequest) -> (Result<PinReport, PinError>, Vec<PinEvent>) {
        let mut events = Vec::new();
        let result = pin_target(desktop, request, &mut |e| events.push(e.clone()));
        (result, events)
    }

    #[test]
    fn test_notepad_scenario_launch_locate_maintain() {
        let desktop = FakeDesktop::new()
            .launching_pid(PID)
            .with_window(HWND, PID, true, false, 4)
            .process_exits_after_checks(PID, 6);

        let (result, events) = run(&desktop, &request(PinPolicy::default()));
        let report = result.unwrap();

        assert_eq!(desktop.launches(), vec![PathBuf::from(NOTEPAD)]);
        assert_eq!(report.process.pid, Pid::from_raw(PID));
        assert_eq!(
            report.process.origin,
            ProcessOrigin::Launched {
                input_idle: InputIdle::Ready
            }
        );
        assert_eq!(report.window, WindowHandle::from_raw(HWND));
        assert_eq!(report.foreground, ForegroundOutcome::Confirmed { attempts: 1 });

        let maintenance = report.maintenance.unwrap();
        assert_eq!(maintenance.stop, MaintenanceStop::ProcessExited);
        assert_eq!(maintenance.assertions, 6);
        assert_eq!(desktop.set_foreground_calls(), 6);
        assert_eq!(desktop.stale_foreground_calls(), 0);

        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], PinEvent::ProcessResolved(_)));
        assert!(matches!(events[1], PinEvent::WindowLocated { .. }));
        assert!(matches!(events[2], PinEvent::Foreground(_)));
        assert!(matches!(events[3], PinEvent::Maintenance(_)));
    }

    #[test]
    fn test_locked_scenario_launch_denied() {
        let desktop = FakeDesktop::new().failing_launch(5);

        let (result, events) = run(
            &desktop,
            &PinRequest::new(r"C:\Apps\Locked.exe", PinPolicy::default()),
        );

        match result {
            Err(PinError::Process(ProcessError::LaunchFailed { code, .. })) => {
                assert_eq!(code, Some(5))
            }
            other => panic!("expected launch failure, got {:?}", other),
        }
        assert_eq!(desktop.enumerations(), 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_no_window_scenario_makes_no_foreground_calls() {
        let desktop = FakeDesktop::new().launching_pid(PID);
        let policy = PinPolicy {
            window_max_attempts: 50,
            ..PinPolicy::default()
        };

        let (result, _) = run(&desktop, &request(policy));

        assert!(matches!(
            result,
            Err(PinError::Window(WindowError::NotFound { attempts: 50, .. }))
        ));
        assert_eq!(desktop.enumerations(), 50);
        assert_eq!(desktop.set_foreground_calls(), 0);
        assert_eq!(desktop.force_foreground_calls(), 0);
    }

    #[test]
    fn test_running_process_is_not_relaunched() {
        let desktop = FakeDesktop::new()
            .with_running_process("notepad.exe", PID)
            .with_window(HWND, PID, true, false, 0)
            .process_exits_after_checks(PID, 1);

        let (result, _) = run(&desktop, &request(PinPolicy::default()));
        let report = result.unwrap();

        assert_eq!(report.process.origin, ProcessOrigin::Discovered);
        assert!(desktop.launches().is_empty());
    }

    #[test]
    fn test_suppression_released_once_on_success() {
        let desktop = FakeDesktop::new()
            .launching_pid(PID)
            .with_window(HWND, PID, true, false, 0)
            .process_exits_after_checks(PID, 3);

        let (result, events) = run(&desktop, &request(suppressing(SuppressionMode::AllKeys)));
        let report = result.unwrap();

        assert!(report.suppression_active);
        assert_eq!(desktop.intercept_installs(), 1);
        assert_eq!(desktop.intercept_releases(), 1);
        assert_eq!(
            events.first(),
            Some(&PinEvent::SuppressionStarted {
                mode: SuppressionMode::AllKeys
            })
        );
        assert!(events.contains(&PinEvent::SuppressionEnded {
            mode: SuppressionMode::AllKeys
        }));
        // Takeover ran suppressed, maintenance did not.
        assert_eq!(desktop.suppressed_foreground_calls(), 1);
        assert_eq!(desktop.set_foreground_calls(), 3);
    }

    #[test]
    fn test_suppression_released_once_on_launch_failure() {
        let desktop = FakeDesktop::new().failing_launch(5);
        let (result, _) = run(&desktop, &request(suppressing(SuppressionMode::FocusKeys)));

        assert!(result.is_err());
        assert_eq!(desktop.intercept_installs(), 1);
        assert_eq!(desktop.intercept_releases(), 1);
        assert_eq!(desktop.installed_mode(), None);
    }

    #[test]
    fn test_suppression_released_once_on_window_not_found() {
        let desktop = FakeDesktop::new().launching_pid(PID);
        let policy = PinPolicy {
            window_max_attempts: 5,
            ..suppressing(SuppressionMode::AllKeys)
        };
        let (result, _) = run(&desktop, &request(policy));

        assert!(matches!(result, Err(PinError::Window(_))));
        assert_eq!(desktop.intercept_installs(), 1);
        assert_eq!(desktop.intercept_releases(), 1);
    }

    #[test]
    fn test_suppression_released_once_on_invalid_path() {
        let desktop = FakeDesktop::new();
        let (result, _) = run(
            &desktop,
            &PinRequest::new(r"C:\Apps\", suppressing(SuppressionMode::AllKeys)),
        );

        assert!(matches!(
            result,
            Err(PinError::Process(ProcessError::InvalidPath { .. }))
        ));
        assert_eq!(desktop.intercept_installs(), 1);
        assert_eq!(desktop.intercept_releases(), 1);
    }

    #[test]
    fn test_suppression_released_once_when_window_lost_during_takeover() {
        let desktop = FakeDesktop::new()
            .launching_pid(PID)
            .with_window(HWND, PID, true, false, 0)
            .foreground_never_confirms()
            .window_closes_after_forces(HWND, 2);

        let (result, _) = run(&desktop, &request(suppressing(SuppressionMode::AllKeys)));
        let report = result.unwrap();

        assert_eq!(report.foreground, ForegroundOutcome::WindowLost { attempts: 2 });
        assert_eq!(report.maintenance, None);
        assert_eq!(desktop.intercept_installs(), 1);
        assert_eq!(desktop.intercept_releases(), 1);
        assert_eq!(desktop.set_foreground_calls(), 0);
    }

    #[test]
    fn test_failed_suppression_install_does_not_block_takeover() {
        let desktop = FakeDesktop::new()
            .launching_pid(PID)
            .with_window(HWND, PID, true, false, 0)
            .process_exits_after_checks(PID, 1)
            .failing_intercept_install();

        let (result, events) = run(&desktop, &request(suppressing(SuppressionMode::AllKeys)));
        let report = result.unwrap();

        assert!(!report.suppression_active);
        assert_eq!(desktop.intercept_releases(), 0);
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, PinEvent::SuppressionStarted { .. }))
        );
    }

    #[test]
    fn test_hand_off_skips_maintenance() {
        let desktop = FakeDesktop::new()
            .launching_pid(PID)
            .with_window(HWND, PID, true, false, 0);
        let policy = PinPolicy {
            maintain: false,
            ..PinPolicy::default()
        };

        let (result, _) = run(&desktop, &request(policy));
        let report = result.unwrap();

        assert!(report.foreground.is_confirmed());
        assert_eq!(report.maintenance, None);
        assert_eq!(desktop.set_foreground_calls(), 0);
    }

    #[test]
    fn test_window_closed_during_maintenance_ends_run() {
        let desktop = FakeDesktop::new()
            .launching_pid(PID)
            .with_window(HWND, PID, true, false, 0)
            .window_closes_after_assertions(HWND, 2);

        let (result, _) = run(&desktop, &request(PinPolicy::default()));
        let report = result.unwrap();

        let maintenance = report.maintenance.unwrap();
        assert_eq!(maintenance.stop, MaintenanceStop::WindowLost);
        assert_eq!(maintenance.assertions, 2);
        assert_eq!(desktop.stale_foreground_calls(), 0);
    }
}
