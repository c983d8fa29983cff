//! サブプロセス実行 Outbound ポート
//!
//! 外部ナビゲーションアプリの起動（URI を OS のオープナーに渡す）に使う。

use crate::error::Error;
use std::path::Path;

/// サブプロセス実行抽象（Outbound ポート）
pub trait Process: Send + Sync {
    /// プログラムを実行し、終了コードを返す
    fn run(&self, program: &Path, args: &[String]) -> Result<i32, Error>;
}
