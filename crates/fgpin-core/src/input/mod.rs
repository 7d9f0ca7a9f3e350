pub mod errors;
pub mod guard;
pub mod types;

pub use errors::InputError;
pub use guard::InputSuppression;
pub use types::{SuppressionMode, should_suppress};
