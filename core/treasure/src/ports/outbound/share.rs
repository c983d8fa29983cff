//! 共有 Outbound ポート

use common::error::Error;

/// テキストをシステムの共有先に渡す能力（Outbound ポート）
///
/// 実装は `adapter::ConsoleShareSink`（標準出力へ表示）など。
pub trait ShareSink: Send + Sync {
    fn share(&self, text: &str) -> Result<(), Error>;
}
