//! Scriptable in-memory desktop for tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use crate::input::{InputError, SuppressionMode};
use crate::platform::{Desktop, KeyboardIntercept};
use crate::process::{InputIdle, Pid, ProcessError, extract_base_name};
use crate::window::{WindowError, WindowHandle, WindowSnapshot};

#[derive(Debug, Clone)]
struct ScriptedWindow {
    snapshot: WindowSnapshot,
    /// Enumerations that complete before this window shows up.
    appears_after: u32,
    closed: bool,
    closes_after_assertions: Option<u32>,
    closes_after_forces: Option<u32>,
}

#[derive(Debug, Clone, Copy)]
enum LaunchScript {
    Succeeds { pid: u32 },
    Fails { code: i32 },
}

#[derive(Debug)]
struct FakeState {
    running: Vec<(String, Pid)>,
    launch: LaunchScript,
    launched: Vec<PathBuf>,
    input_idle: InputIdle,
    input_idle_waits: u32,
    exits_after_checks: HashMap<Pid, u32>,
    liveness_checks: HashMap<Pid, u32>,
    windows: Vec<ScriptedWindow>,
    enumerations: u32,
    unsupported_windows: bool,
    foreground: Option<WindowHandle>,
    confirm_after_forces: Option<u32>,
    plain_accepted: bool,
    set_calls: u32,
    force_calls: u32,
    stale_calls: u32,
    suppressed_calls: u32,
    intercept_fails: bool,
    installed_mode: Option<SuppressionMode>,
    installs: u32,
    releases: u32,
    sleeps: Vec<Duration>,
}

impl FakeState {
    fn window(&self, handle: WindowHandle) -> Option<&ScriptedWindow> {
        self.windows.iter().find(|w| w.snapshot.handle == handle)
    }

    fn is_window(&self, handle: WindowHandle) -> bool {
        self.window(handle).is_some_and(|w| {
            !w.closed
                && w.closes_after_assertions.is_none_or(|n| self.set_calls < n)
                && w.closes_after_forces.is_none_or(|n| self.force_calls < n)
        })
    }

    fn note_request(&mut self, handle: WindowHandle) -> bool {
        if self.installed_mode.is_some() {
            self.suppressed_calls += 1;
        }
        if self.is_window(handle) {
            true
        } else {
            self.stale_calls += 1;
            false
        }
    }
}

/// In-memory [`Desktop`] with builder-style scripting and call counters.
///
/// Defaults: no processes running, launches succeed with PID 1000, input idle
/// is reached, the first forced request is confirmed, plain requests are accepted.
#[derive(Debug, Clone)]
pub(crate) struct FakeDesktop {
    state: Rc<RefCell<FakeState>>,
}

impl FakeDesktop {
    pub(crate) fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(FakeState {
                running: Vec::new(),
                launch: LaunchScript::Succeeds { pid: 1000 },
                launched: Vec::new(),
                input_idle: InputIdle::Ready,
                input_idle_waits: 0,
                exits_after_checks: HashMap::new(),
                liveness_checks: HashMap::new(),
                windows: Vec::new(),
                enumerations: 0,
                unsupported_windows: false,
                foreground: None,
                confirm_after_forces: Some(1),
                plain_accepted: true,
                set_calls: 0,
                force_calls: 0,
                stale_calls: 0,
                suppressed_calls: 0,
                intercept_fails: false,
                installed_mode: None,
                installs: 0,
                releases: 0,
                sleeps: Vec::new(),
            })),
        }
    }

    fn with_state(self, f: impl FnOnce(&mut FakeState)) -> Self {
        f(&mut self.state.borrow_mut());
        self
    }

    pub(crate) fn with_running_process(self, name: &str, pid: u32) -> Self {
        self.with_state(|s| s.running.push((name.to_string(), Pid::from_raw(pid))))
    }

    pub(crate) fn launching_pid(self, pid: u32) -> Self {
        self.with_state(|s| s.launch = LaunchScript::Succeeds { pid })
    }

    pub(crate) fn failing_launch(self, code: i32) -> Self {
        self.with_state(|s| s.launch = LaunchScript::Fails { code })
    }

    pub(crate) fn input_idle_result(self, result: InputIdle) -> Self {
        self.with_state(|s| s.input_idle = result)
    }

    pub(crate) fn with_window(
        self,
        raw: isize,
        pid: u32,
        visible: bool,
        has_owner: bool,
        appears_after: u32,
    ) -> Self {
        self.with_state(|s| {
            s.windows.push(ScriptedWindow {
                snapshot: WindowSnapshot {
                    handle: WindowHandle::from_raw(raw),
                    owner_pid: Pid::from_raw(pid),
                    visible,
                    has_owner,
                },
                appears_after,
                closed: false,
                closes_after_assertions: None,
                closes_after_forces: None,
            })
        })
    }

    fn edit_window(self, raw: isize, f: impl FnOnce(&mut ScriptedWindow)) -> Self {
        self.with_state(|s| {
            if let Some(w) = s
                .windows
                .iter_mut()
                .find(|w| w.snapshot.handle == WindowHandle::from_raw(raw))
            {
                f(w);
            }
        })
    }

    pub(crate) fn window_closed(self, raw: isize) -> Self {
        self.edit_window(raw, |w| w.closed = true)
    }

    /// The window is destroyed once `n` plain foreground requests were made.
    pub(crate) fn window_closes_after_assertions(self, raw: isize, n: u32) -> Self {
        self.edit_window(raw, |w| w.closes_after_assertions = Some(n))
    }

    /// The window is destroyed once `n` forced foreground requests were made.
    pub(crate) fn window_closes_after_forces(self, raw: isize, n: u32) -> Self {
        self.edit_window(raw, |w| w.closes_after_forces = Some(n))
    }

    /// The process reports alive for `n` liveness checks, then dead.
    pub(crate) fn process_exits_after_checks(self, pid: u32, n: u32) -> Self {
        self.with_state(|s| {
            s.exits_after_checks.insert(Pid::from_raw(pid), n);
        })
    }

    pub(crate) fn unsupported_windows(self) -> Self {
        self.with_state(|s| s.unsupported_windows = true)
    }

    pub(crate) fn foreground_confirms_after_forces(self, n: u32) -> Self {
        self.with_state(|s| s.confirm_after_forces = Some(n))
    }

    pub(crate) fn foreground_never_confirms(self) -> Self {
        self.with_state(|s| {
            s.confirm_after_forces = None;
            s.plain_accepted = false;
        })
    }

    pub(crate) fn plain_foreground_accepted(self, accepted: bool) -> Self {
        self.with_state(|s| s.plain_accepted = accepted)
    }

    pub(crate) fn failing_intercept_install(self) -> Self {
        self.with_state(|s| s.intercept_fails = true)
    }

    pub(crate) fn launches(&self) -> Vec<PathBuf> {
        self.state.borrow().launched.clone()
    }

    pub(crate) fn input_idle_waits(&self) -> u32 {
        self.state.borrow().input_idle_waits
    }

    pub(crate) fn enumerations(&self) -> u32 {
        self.state.borrow().enumerations
    }

    pub(crate) fn set_foreground_calls(&self) -> u32 {
        self.state.borrow().set_calls
    }

    pub(crate) fn force_foreground_calls(&self) -> u32 {
        self.state.borrow().force_calls
    }

    /// Foreground requests made against a handle that was no longer valid.
    pub(crate) fn stale_foreground_calls(&self) -> u32 {
        self.state.borrow().stale_calls
    }

    /// Foreground requests made while an intercept was installed.
    pub(crate) fn suppressed_foreground_calls(&self) -> u32 {
        self.state.borrow().suppressed_calls
    }

    pub(crate) fn intercept_installs(&self) -> u32 {
        self.state.borrow().installs
    }

    pub(crate) fn intercept_releases(&self) -> u32 {
        self.state.borrow().releases
    }

    pub(crate) fn installed_mode(&self) -> Option<SuppressionMode> {
        self.state.borrow().installed_mode
    }

    pub(crate) fn sleeps(&self) -> Vec<Duration> {
        self.state.borrow().sleeps.clone()
    }
}

struct FakeIntercept {
    state: Rc<RefCell<FakeState>>,
}

impl KeyboardIntercept for FakeIntercept {
    fn release(self: Box<Self>) -> Result<(), InputError> {
        let mut state = self.state.borrow_mut();
        state.releases += 1;
        state.installed_mode = None;
        Ok(())
    }
}

impl Desktop for FakeDesktop {
    fn find_process(&self, base_name: &str) -> Option<Pid> {
        let state = self.state.borrow();
        state
            .running
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(base_name))
            .map(|(_, pid)| *pid)
    }

    fn launch(&self, path: &Path) -> Result<Pid, ProcessError> {
        let mut state = self.state.borrow_mut();
        match state.launch {
            LaunchScript::Succeeds { pid } => {
                state.launched.push(path.to_path_buf());
                let pid = Pid::from_raw(pid);
                let name = extract_base_name(&path.to_string_lossy())
                    .unwrap_or_default()
                    .to_string();
                state.running.push((name, pid));
                Ok(pid)
            }
            LaunchScript::Fails { code } => Err(ProcessError::LaunchFailed {
                path: path.to_path_buf(),
                code: Some(code),
                message: format!("launch denied (os error {})", code),
            }),
        }
    }

    fn wait_for_input_idle(&self, _pid: Pid, _timeout: Duration) -> InputIdle {
        let mut state = self.state.borrow_mut();
        state.input_idle_waits += 1;
        state.input_idle
    }

    fn is_process_alive(&self, pid: Pid) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.running.iter().any(|(_, p)| *p == pid) {
            return false;
        }
        let checks = state.liveness_checks.entry(pid).or_insert(0);
        *checks += 1;
        let checks = *checks;
        state
            .exits_after_checks
            .get(&pid)
            .is_none_or(|limit| checks <= *limit)
    }

    fn top_level_windows(&self) -> Result<Vec<WindowSnapshot>, WindowError> {
        let mut state = self.state.borrow_mut();
        if state.unsupported_windows {
            return Err(WindowError::Unsupported {
                platform: "fake".to_string(),
            });
        }
        let completed = state.enumerations;
        state.enumerations += 1;
        Ok(state
            .windows
            .iter()
            .filter(|w| w.appears_after <= completed)
            .filter(|w| state.is_window(w.snapshot.handle))
            .map(|w| w.snapshot.clone())
            .collect())
    }

    fn is_window(&self, window: WindowHandle) -> bool {
        self.state.borrow().is_window(window)
    }

    fn foreground_window(&self) -> Option<WindowHandle> {
        self.state.borrow().foreground
    }

    fn set_foreground(&self, window: WindowHandle) -> bool {
        let mut state = self.state.borrow_mut();
        let valid = state.note_request(window);
        state.set_calls += 1;
        if valid && state.plain_accepted {
            state.foreground = Some(window);
            return true;
        }
        false
    }

    fn force_foreground(&self, window: WindowHandle) -> bool {
        let mut state = self.state.borrow_mut();
        let valid = state.note_request(window);
        state.force_calls += 1;
        if valid && state.confirm_after_forces.is_some_and(|n| state.force_calls >= n) {
            state.foreground = Some(window);
            return true;
        }
        valid
    }

    fn install_keyboard_intercept(
        &self,
        mode: SuppressionMode,
    ) -> Result<Box<dyn KeyboardIntercept>, InputError> {
        let mut state = self.state.borrow_mut();
        if state.intercept_fails {
            return Err(InputError::InstallFailed {
                code: 5,
                message: "Access is denied.".to_string(),
            });
        }
        if state.installed_mode.is_some() {
            return Err(InputError::AlreadyInstalled);
        }
        state.installs += 1;
        state.installed_mode = Some(mode);
        Ok(Box::new(FakeIntercept {
            state: Rc::clone(&self.state),
        }))
    }

    fn sleep(&self, duration: Duration) {
        self.state.borrow_mut().sleeps.push(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_appears_after_enumerations() {
        let desktop = FakeDesktop::new().with_window(1, 10, true, false, 2);
        assert!(desktop.top_level_windows().unwrap().is_empty());
        assert!(desktop.top_level_windows().unwrap().is_empty());
        assert_eq!(desktop.top_level_windows().unwrap().len(), 1);
        assert_eq!(desktop.enumerations(), 3);
    }

    #[test]
    fn test_launched_process_becomes_discoverable() {
        let desktop = FakeDesktop::new().launching_pid(77);
        assert_eq!(desktop.find_process("App.exe"), None);
        let pid = desktop.launch(Path::new(r"C:\Apps\App.exe")).unwrap();
        assert_eq!(pid, Pid::from_raw(77));
        assert_eq!(desktop.find_process("app.exe"), Some(pid));
    }

    #[test]
    fn test_second_intercept_install_is_rejected() {
        let desktop = FakeDesktop::new();
        let first = desktop.install_keyboard_intercept(SuppressionMode::AllKeys);
        assert!(first.is_ok());
        assert!(matches!(
            desktop.install_keyboard_intercept(SuppressionMode::AllKeys),
            Err(InputError::AlreadyInstalled)
        ));
    }
}
