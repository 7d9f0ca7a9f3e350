pub mod errors;
pub mod handler;
pub mod types;

pub use errors::PinError;
pub use handler::pin_target;
pub use types::{PinEvent, PinReport, PinRequest};
