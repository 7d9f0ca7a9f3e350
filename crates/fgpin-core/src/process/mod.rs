pub mod errors;
pub mod handler;
pub mod operations;
pub mod types;

pub use errors::ProcessError;
pub use handler::resolve_process;
pub use operations::{
    extract_base_name, find_process_by_base_name, is_process_running, launch_process,
};
pub use types::{InputIdle, Pid, ProcessOrigin, ResolvedProcess};
