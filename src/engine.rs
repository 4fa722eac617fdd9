//! File discovery and check/apply execution

pub mod executor;
pub mod file_walker;
pub mod report;

pub use executor::ExecutionEngine;
pub use file_walker::collect_source_files;
pub use report::{ApplyOutcome, ApplyReport, CheckReport, FileStatus};
