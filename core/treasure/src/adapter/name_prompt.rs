//! 新規ポイントの名前入力 CLI 実装
//!
//! usecase は NamePrompt trait 経由でのみ利用する。

use crate::ports::outbound::NamePrompt;
use common::error::Error;
use std::io::{self, BufRead, Write};

/// 非対話用: 常にキャンセル（None）を返す（CI 等でプロンプトを出さない）
#[derive(Debug, Clone, Default)]
pub struct NoNamePrompt;

impl NoNamePrompt {
    pub fn new() -> Self {
        Self
    }
}

impl NamePrompt for NoNamePrompt {
    fn ask_name(&self) -> Result<Option<String>, Error> {
        Ok(None)
    }
}

/// 標準入出力で名前を問い合わせる実装。空入力はキャンセル扱い。
#[derive(Debug, Clone, Default)]
pub struct CliNamePrompt;

impl CliNamePrompt {
    pub fn new() -> Self {
        Self
    }
}

impl NamePrompt for CliNamePrompt {
    fn ask_name(&self) -> Result<Option<String>, Error> {
        eprint!("Name for this location: ");
        let _ = io::stderr().flush();

        let stdin = io::stdin();
        let mut line = String::new();
        stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(e.to_string()))?;

        let name = line.trim();
        if name.is_empty() {
            Ok(None)
        } else {
            Ok(Some(name.to_string()))
        }
    }
}
