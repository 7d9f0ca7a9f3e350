pub mod handler;
pub mod types;

pub use handler::{enforce_foreground, maintain_foreground};
pub use types::{ForegroundOutcome, MaintenanceOutcome, MaintenanceStop};
