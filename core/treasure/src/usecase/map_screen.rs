//! 地図表示モデル: saved / transient の 2 レイヤーと表示領域
//!
//! 保存済みポイントと検索結果（一時）を独立したレイヤーで持ち、描画時に合成する。
//! transient が非空ならそれを、空なら saved を表示する。どちらの描画も
//! キャンバスへは全置換で渡すため、古いマーカーが残ることはない。
//! recenter は表示領域だけを動かし、アノテーションには触れない。

use crate::domain::PointOfInterest;
use crate::ports::outbound::{Annotation, MapCanvas};
use common::error::Error;
use common::geo::{Coordinate, Region};
use common::places::Place;
use std::sync::Arc;

/// 起動時の表示中心（カナダ中央部）
pub const INITIAL_CENTER: Coordinate = Coordinate::new(56.1304, -106.3468);
/// 起動時のスパン（2000 km）
pub const INITIAL_SPAN_METERS: f64 = 2_000_000.0;
/// 検索結果へ寄るときのスパン
pub const SEARCH_SPAN_METERS: f64 = 1_000.0;

/// 地図表示モデル
pub struct MapScreen {
    canvas: Arc<dyn MapCanvas>,
    saved: Vec<Annotation>,
    transient: Vec<Annotation>,
    region: Region,
}

impl MapScreen {
    pub fn new(canvas: Arc<dyn MapCanvas>) -> Self {
        Self {
            canvas,
            saved: Vec::new(),
            transient: Vec::new(),
            region: Region::new(INITIAL_CENTER, INITIAL_SPAN_METERS),
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// saved レイヤーを visible 集合から置き換える。
    /// ストアの変更はユーザーを保存済みポイントの閲覧に戻すため、
    /// transient レイヤーも同時に破棄する。
    pub fn set_saved(&mut self, points: &[PointOfInterest]) -> Result<(), Error> {
        self.saved = points
            .iter()
            .map(|p| Annotation::new(p.name(), p.coordinate()))
            .collect();
        self.transient.clear();
        self.render()
    }

    /// transient レイヤーを検索結果で置き換える。
    /// 空の結果は saved の表示に戻るだけで、地図を空にはしない。
    pub fn set_transient(&mut self, places: &[Place]) -> Result<(), Error> {
        self.transient = places
            .iter()
            .map(|p| Annotation::new(p.name.clone(), p.coordinate))
            .collect();
        self.render()
    }

    /// 検索結果の表示を終え、保存済みポイントへ明示的に戻す
    pub fn clear_transient(&mut self) -> Result<(), Error> {
        self.transient.clear();
        self.render()
    }

    /// 表示領域を移動する。span が None なら現在のスパンを保つ。
    pub fn recenter(&mut self, center: Coordinate, span_meters: Option<f64>) -> Result<(), Error> {
        if let Some(span) = span_meters {
            self.region.span_meters = span;
        }
        self.region.center = center;
        self.canvas.recenter(&self.region)
    }

    fn render(&self) -> Result<(), Error> {
        let composed = if self.transient.is_empty() {
            &self.saved
        } else {
            &self.transient
        };
        self.canvas.render_annotations(composed)
    }
}
