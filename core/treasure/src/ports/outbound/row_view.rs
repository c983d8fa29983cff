//! 行リスト Outbound ポート

use crate::domain::PointOfInterest;
use common::error::Error;

/// visible 集合を行として描画する受動ビュー（Outbound ポート）
///
/// visible が変わるたびに全行を渡して描画し直す。
pub trait RowView: Send + Sync {
    fn render_rows(&self, rows: &[PointOfInterest]) -> Result<(), Error>;
}
