//! 標準ファイルシステム実装（std::fs を委譲）

use crate::error::Error;
use crate::ports::outbound::FileSystem;
use std::fs::OpenOptions;
use std::path::Path;

/// 標準ライブラリの fs を使う FileSystem 実装
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        std::fs::create_dir_all(path)
            .map_err(|e| Error::io_msg(format!("create_dir_all {}: {}", path.display(), e)))
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::io_msg(format!("open append {}: {}", path.display(), e)))?;
        Ok(Box::new(file))
    }
}
