pub mod errors;
pub mod fs_atomic;
pub mod logging;

pub use errors::SetupError;
pub use fs_atomic::atomic_write_file;
pub use logging::append_setup_log_line;
