//! OS seam for process, window and keyboard access.
//!
//! The pipeline only talks to [`Desktop`]. [`SystemDesktop`] is the real
//! implementation: process operations are portable, window and input
//! operations use Win32 and report `Unsupported` elsewhere.

pub mod system;
pub mod traits;

#[cfg(windows)]
mod win32;
#[cfg(windows)]
use win32 as native;

#[cfg(not(windows))]
mod unsupported;
#[cfg(not(windows))]
use unsupported as native;

#[cfg(test)]
pub(crate) mod fake;

pub use system::SystemDesktop;
pub use traits::{Desktop, KeyboardIntercept};
