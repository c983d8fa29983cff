//! Outbound ポート: インフラ（FS・サブプロセス・ログ）を抽象する trait

pub mod fs;
pub mod log;
pub mod process;

pub use fs::FileSystem;
pub use log::{now_iso8601, DiagnosticLog, LogLevel, LogRecord};
pub use process::Process;
