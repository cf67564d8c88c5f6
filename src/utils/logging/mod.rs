//! Logging utilities for output and progress tracking

pub mod log;
pub mod progress;

pub use self::log::{TableIo, log_table_finished, log_table_started};
pub use self::progress::{create_main_progress_bar, finish_and_clear};
