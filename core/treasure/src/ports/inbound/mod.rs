//! Inbound ポート: ドライバ（CLI）がスクリーンを起動するインターフェース

use crate::cli::Config;
use common::error::Error;

/// スクリーンアプリケーションを実行する Inbound ポート
///
/// main はこの trait を実装した Runner の run を呼び出す。
pub trait RunScreenApp {
    fn run(&mut self, config: Config) -> Result<i32, Error>;
}
