//! Win32 window, foreground and keyboard-hook backend.

use std::ffi::c_void;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, warn};
use windows::Win32::Foundation::{CloseHandle, HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::System::Threading::{
    AttachThreadInput, GetCurrentThreadId, OpenProcess, PROCESS_QUERY_INFORMATION,
    PROCESS_SYNCHRONIZE, WaitForInputIdle,
};
use windows::Win32::UI::Input::KeyboardAndMouse::{SetActiveWindow, SetFocus};
use windows::Win32::UI::WindowsAndMessaging::{
    BringWindowToTop, CallNextHookEx, EnumWindows, GW_OWNER, GetForegroundWindow, GetMessageW,
    GetWindow, GetWindowThreadProcessId, IsIconic, IsWindow, IsWindowVisible, KBDLLHOOKSTRUCT, MSG,
    PM_NOREMOVE, PeekMessageW, PostThreadMessageW, SW_RESTORE, SetForegroundWindow,
    SetWindowsHookExW, ShowWindow, UnhookWindowsHookEx, WH_KEYBOARD_LL, WM_QUIT,
};
use windows::core::BOOL;

use crate::input::{InputError, SuppressionMode, should_suppress};
use crate::platform::KeyboardIntercept;
use crate::process::{self, InputIdle, Pid};
use crate::window::{WindowError, WindowHandle, WindowSnapshot};

const WAIT_OBJECT_0: u32 = 0;
const WAIT_TIMEOUT: u32 = 0x102;

fn to_hwnd(window: WindowHandle) -> HWND {
    HWND(window.as_raw() as *mut c_void)
}

fn from_hwnd(hwnd: HWND) -> WindowHandle {
    WindowHandle::from_raw(hwnd.0 as isize)
}

pub(super) fn wait_for_input_idle(pid: Pid, timeout: Duration) -> InputIdle {
    let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);

    // Safety: the handle is owned here and closed before returning.
    unsafe {
        let handle = match OpenProcess(
            PROCESS_QUERY_INFORMATION | PROCESS_SYNCHRONIZE,
            false,
            pid.as_u32(),
        ) {
            Ok(handle) => handle,
            Err(e) => {
                debug!(
                    event = "core.platform.open_process_failed",
                    pid = pid.as_u32(),
                    error = %e
                );
                return InputIdle::Unavailable;
            }
        };

        let result = WaitForInputIdle(handle, millis);
        let _ = CloseHandle(handle);

        match result {
            WAIT_OBJECT_0 => InputIdle::Ready,
            WAIT_TIMEOUT => InputIdle::TimedOut,
            // WAIT_FAILED: console processes have no message queue to idle on
            _ => InputIdle::Unavailable,
        }
    }
}

pub(super) fn is_process_alive(pid: Pid) -> bool {
    process::is_process_running(pid)
}

unsafe extern "system" fn collect_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // Safety: top_level_windows passes a valid mutable Vec pointer via LPARAM.
    let windows = unsafe { &mut *(lparam.0 as *mut Vec<WindowSnapshot>) };

    unsafe {
        let mut pid: u32 = 0;
        GetWindowThreadProcessId(hwnd, Some(&mut pid));
        let has_owner = GetWindow(hwnd, GW_OWNER).is_ok_and(|owner| !owner.0.is_null());

        windows.push(WindowSnapshot {
            handle: from_hwnd(hwnd),
            owner_pid: Pid::from_raw(pid),
            visible: IsWindowVisible(hwnd).as_bool(),
            has_owner,
        });
    }

    BOOL(1)
}

pub(super) fn top_level_windows() -> Result<Vec<WindowSnapshot>, WindowError> {
    let mut windows: Vec<WindowSnapshot> = Vec::new();

    // Safety: `windows` outlives the synchronous enumeration.
    unsafe {
        EnumWindows(
            Some(collect_window),
            LPARAM((&mut windows as *mut Vec<WindowSnapshot>) as isize),
        )
        .map_err(|e| WindowError::EnumerationFailed {
            message: e.message(),
        })?;
    }

    Ok(windows)
}

pub(super) fn is_window(window: WindowHandle) -> bool {
    unsafe { IsWindow(Some(to_hwnd(window))).as_bool() }
}

pub(super) fn foreground_window() -> Option<WindowHandle> {
    let hwnd = unsafe { GetForegroundWindow() };
    (!hwnd.0.is_null()).then(|| from_hwnd(hwnd))
}

pub(super) fn set_foreground(window: WindowHandle) -> bool {
    unsafe { SetForegroundWindow(to_hwnd(window)).as_bool() }
}

/// Attach this thread's input state to the foreground and target threads so
/// that the foreground lock does not apply, then restore and raise the target.
pub(super) fn force_foreground(window: WindowHandle) -> bool {
    let hwnd = to_hwnd(window);

    unsafe {
        if !IsWindow(Some(hwnd)).as_bool() {
            return false;
        }

        let current_thread = GetCurrentThreadId();
        let foreground = GetForegroundWindow();
        let foreground_thread = if foreground.0.is_null() {
            0
        } else {
            GetWindowThreadProcessId(foreground, None)
        };
        let target_thread = GetWindowThreadProcessId(hwnd, None);

        let mut attached = Vec::with_capacity(2);
        for thread in [foreground_thread, target_thread] {
            if thread != 0
                && thread != current_thread
                && !attached.contains(&thread)
                && AttachThreadInput(current_thread, thread, true).as_bool()
            {
                attached.push(thread);
            }
        }

        if IsIconic(hwnd).as_bool() {
            let _ = ShowWindow(hwnd, SW_RESTORE);
        }
        let _ = BringWindowToTop(hwnd);
        let accepted = SetForegroundWindow(hwnd).as_bool();
        let _ = SetActiveWindow(hwnd);
        let _ = SetFocus(Some(hwnd));

        for thread in attached {
            let _ = AttachThreadInput(current_thread, thread, false);
        }

        accepted
    }
}

// Low-level hook procs receive no user data, so the active mode is global.
static HOOK_MODE: AtomicU8 = AtomicU8::new(0);
static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

fn mode_to_u8(mode: SuppressionMode) -> u8 {
    match mode {
        SuppressionMode::Off => 0,
        SuppressionMode::FocusKeys => 1,
        SuppressionMode::AllKeys => 2,
    }
}

fn mode_from_u8(raw: u8) -> SuppressionMode {
    match raw {
        1 => SuppressionMode::FocusKeys,
        2 => SuppressionMode::AllKeys,
        _ => SuppressionMode::Off,
    }
}

unsafe extern "system" fn keyboard_hook_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if code >= 0 {
        // Safety: for WH_KEYBOARD_LL with code >= 0, lparam points to a KBDLLHOOKSTRUCT.
        let event = unsafe { &*(lparam.0 as *const KBDLLHOOKSTRUCT) };
        let mode = mode_from_u8(HOOK_MODE.load(Ordering::Relaxed));
        if should_suppress(mode, event.vkCode) {
            return LRESULT(1);
        }
    }
    unsafe { CallNextHookEx(None, code, wparam, lparam) }
}

/// Hook thread body: install, report readiness, pump messages until WM_QUIT.
fn run_hook_thread(ready: mpsc::Sender<Result<u32, InputError>>) {
    unsafe {
        let mut msg = MSG::default();
        // Create this thread's message queue before anyone posts to it.
        let _ = PeekMessageW(&mut msg, None, 0, 0, PM_NOREMOVE);

        let installed = GetModuleHandleW(None).and_then(|module| {
            let instance: HINSTANCE = module.into();
            SetWindowsHookExW(WH_KEYBOARD_LL, Some(keyboard_hook_proc), Some(instance), 0)
        });

        let hook = match installed {
            Ok(hook) => hook,
            Err(e) => {
                let _ = ready.send(Err(InputError::InstallFailed {
                    code: e.code().0,
                    message: e.message(),
                }));
                return;
            }
        };

        if ready.send(Ok(GetCurrentThreadId())).is_err() {
            let _ = UnhookWindowsHookEx(hook);
            return;
        }

        while GetMessageW(&mut msg, None, 0, 0).0 > 0 {}

        if let Err(e) = UnhookWindowsHookEx(hook) {
            warn!(event = "core.platform.unhook_failed", error = %e);
        }
    }
}

struct Win32KeyboardIntercept {
    thread_id: u32,
    thread: JoinHandle<()>,
}

impl KeyboardIntercept for Win32KeyboardIntercept {
    fn release(self: Box<Self>) -> Result<(), InputError> {
        let posted = unsafe { PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0)) };

        let result = match posted {
            Ok(()) => self.thread.join().map_err(|_| InputError::ReleaseFailed {
                message: "keyboard hook thread panicked".to_string(),
            }),
            Err(e) => Err(InputError::ReleaseFailed {
                message: e.message(),
            }),
        };

        HOOK_MODE.store(mode_to_u8(SuppressionMode::Off), Ordering::Relaxed);
        HOOK_INSTALLED.store(false, Ordering::Release);
        result
    }
}

pub(super) fn install_keyboard_intercept(
    mode: SuppressionMode,
) -> Result<Box<dyn KeyboardIntercept>, InputError> {
    if HOOK_INSTALLED
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_err()
    {
        return Err(InputError::AlreadyInstalled);
    }

    HOOK_MODE.store(mode_to_u8(mode), Ordering::Relaxed);

    let (ready_tx, ready_rx) = mpsc::channel();
    let spawned = std::thread::Builder::new()
        .name("fgpin-keyboard-hook".to_string())
        .spawn(move || run_hook_thread(ready_tx));

    let reset = || {
        HOOK_MODE.store(mode_to_u8(SuppressionMode::Off), Ordering::Relaxed);
        HOOK_INSTALLED.store(false, Ordering::Release);
    };

    let thread = match spawned {
        Ok(thread) => thread,
        Err(e) => {
            reset();
            return Err(InputError::InstallFailed {
                code: e.raw_os_error().unwrap_or(-1),
                message: e.to_string(),
            });
        }
    };

    match ready_rx.recv() {
        Ok(Ok(thread_id)) => Ok(Box::new(Win32KeyboardIntercept { thread_id, thread })),
        Ok(Err(e)) => {
            let _ = thread.join();
            reset();
            Err(e)
        }
        Err(_) => {
            let _ = thread.join();
            reset();
            Err(InputError::InstallFailed {
                code: -1,
                message: "keyboard hook thread exited before installing".to_string(),
            })
        }
    }
}
