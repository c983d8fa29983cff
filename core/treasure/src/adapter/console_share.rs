//! 共有シートのコンソール代替

use crate::ports::outbound::ShareSink;
use common::error::Error;

/// 共有テキストを標準出力に表示する ShareSink 実装
#[derive(Debug, Clone, Default)]
pub struct ConsoleShareSink;

impl ShareSink for ConsoleShareSink {
    fn share(&self, text: &str) -> Result<(), Error> {
        println!("share: {}", text);
        Ok(())
    }
}
