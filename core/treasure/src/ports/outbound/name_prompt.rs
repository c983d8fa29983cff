//! 新規ポイントの名前入力 Outbound ポート
//!
//! 地図タップ後の「名前を入力してください」ダイアログに相当する。

use common::error::Error;

/// 名前をユーザーに問い合わせる能力（Outbound ポート）
///
/// None はキャンセル。空文字は返さない実装が望ましいが、
/// 最終的な空名の拒否はストアが行う。
pub trait NamePrompt: Send + Sync {
    fn ask_name(&self) -> Result<Option<String>, Error>;
}
