//! 地図キャンバス Outbound ポート
//!
//! アノテーション集合の全置換と recenter だけを受け付ける受動ビュー。
//! タップ等の入力イベントは CLI ドライバが代替する。

use common::error::Error;
use common::geo::{Coordinate, Region};
use serde::Serialize;

/// 地図に表示する 1 マーカー
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub title: String,
    pub coordinate: Coordinate,
}

impl Annotation {
    pub fn new(title: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            title: title.into(),
            coordinate,
        }
    }
}

/// 地図キャンバス抽象（Outbound ポート）
///
/// 実装は `adapter::ConsoleMapCanvas` やテスト用の記録スタブなど。
pub trait MapCanvas: Send + Sync {
    /// アノテーション集合を丸ごと置き換える。
    /// 以前の集合は必ず消える（clear-then-add、マージしない）。
    fn render_annotations(&self, annotations: &[Annotation]) -> Result<(), Error>;

    /// 表示領域を移動する。アノテーション集合には触れない。
    fn recenter(&self, region: &Region) -> Result<(), Error>;
}
