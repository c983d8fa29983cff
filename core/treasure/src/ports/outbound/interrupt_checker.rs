//! 割り込み検知 Outbound ポート

/// Ctrl+C 等の割り込みを検知する能力（Outbound ポート）
///
/// REPL ループが毎周チェックし、true なら終了する。
pub trait InterruptChecker: Send + Sync {
    fn is_interrupted(&self) -> bool;
}
