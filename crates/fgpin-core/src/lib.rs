//! fgpin-core: Core library for pinning a program's main window to the foreground
//!
//! A run resolves the target process (finding it or launching it), waits for
//! its main window, forces that window to the foreground and then keeps it
//! there until the process exits. All OS access goes through the
//! [`platform::Desktop`] trait.
//!
//! # Main Entry Points
//!
//! - [`pin`] - The full resolve, locate, enforce, maintain pipeline
//! - [`process`] - Find or launch the target process
//! - [`window`] - Locate a process's main window
//! - [`foreground`] - Force and maintain foreground status
//! - [`input`] - Scoped keyboard suppression
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod foreground;
pub mod input;
pub mod logging;
pub mod pin;
pub mod platform;
pub mod process;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use config::{FgpinConfig, PinPolicy};
pub use foreground::{ForegroundOutcome, MaintenanceOutcome, MaintenanceStop};
pub use input::{InputSuppression, SuppressionMode};
pub use pin::{PinError, PinEvent, PinReport, PinRequest};
pub use platform::{Desktop, SystemDesktop};
pub use process::{Pid, ProcessOrigin, ResolvedProcess};
pub use window::{WindowHandle, WindowSnapshot};

// Re-export handler modules as the primary API
pub use pin::handler as pin_ops;

// Re-export logging initialization
pub use logging::init_logging;
