//! 標準アダプタ実装

pub mod file_json_log;
pub mod std_fs;
pub mod std_process;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use std_fs::StdFileSystem;
pub use std_process::StdProcess;
