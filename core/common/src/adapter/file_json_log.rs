//! ファイルへ JSONL で追記する DiagnosticLog 実装

use crate::error::Error;
use crate::ports::outbound::{DiagnosticLog, FileSystem, LogRecord};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// ファイルへ JSONL を追記する DiagnosticLog 実装
///
/// 親ディレクトリが無ければ書き込み時に作成する。
pub struct FileJsonLog {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileJsonLog {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DiagnosticLog for FileJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let line = serde_json::to_string(record).map_err(|e| Error::json(e.to_string()))?;
        let mut w = self.fs.open_append(&self.path)?;
        use std::io::Write;
        w.write_all(line.as_bytes())
            .map_err(|e| Error::io_msg(e.to_string()))?;
        w.write_all(b"\n").map_err(|e| Error::io_msg(e.to_string()))?;
        w.flush().map_err(|e| Error::io_msg(e.to_string()))?;
        Ok(())
    }
}

/// 何も出力しない DiagnosticLog 実装（テスト用・ログ未設定時）
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl DiagnosticLog for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}
