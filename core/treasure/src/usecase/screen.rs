//! スクリーンユースケース: ストア・地図・選択の同期
//!
//! すべての入力（フィルタ変更・タップ・削除・検索・位置取得）はここを通り、
//! ストアを変更したら必ず行リストと地図の saved レイヤーを描画し直す。
//! 外部コラボレータ（位置情報・検索・外部アプリ起動）のエラーは
//! その操作を打ち切り、診断ログにだけ流す。リトライもダイアログもしない。

use crate::domain::{CategoryFilter, PointId, PointOfInterest, PointOfInterestStore, StoreError};
use crate::ports::outbound::{
    LocationEvent, LocationProvider, MapCanvas, NamePrompt, NavigationLauncher, RowView, ShareSink,
};
use crate::usecase::map_screen::{MapScreen, INITIAL_CENTER, INITIAL_SPAN_METERS, SEARCH_SPAN_METERS};
use common::error::Error;
use common::geo::{bounding_center, Coordinate};
use common::places::{PlaceSearchProvider, SearchRequest};
use common::point_id::IdGenerator;
use common::ports::outbound::{DiagnosticLog, LogLevel, LogRecord};
use std::sync::Arc;

/// 位置取得後に走らせる近隣検索のクエリ
pub const NEARBY_QUERY: &str = "restaurant";

/// 起動時に投入する組み込みポイント（名前・緯度・経度・画像タグ）
const SEED: &[(&str, f64, f64, &str)] = &[
    ("McDonald's", 43.6628917, -79.3835274, "mcdonalds.jpg"),
    ("Starbucks", 43.651070, -79.397440, "starbucks.jpg"),
    ("Tim Hortons", 43.657703, -79.384209, "timhortons.jpg"),
];

/// 地図タップで追加したポイントの画像タグ
const DEFAULT_IMAGE_TAG: &str = "default.jpg";

// --- 責務別 Deps（usecase が定義を所有し、wiring は組み立てるだけ）

pub struct ViewDeps {
    pub rows: Arc<dyn RowView>,
    pub share: Arc<dyn ShareSink>,
}

pub struct ServiceDeps {
    pub places: Arc<dyn PlaceSearchProvider>,
    pub location: Arc<dyn LocationProvider>,
    pub navigation: Arc<dyn NavigationLauncher>,
}

pub struct PolicyDeps {
    pub name_prompt: Arc<dyn NamePrompt>,
    pub id_gen: Arc<dyn IdGenerator>,
}

pub struct ObsDeps {
    pub log: Arc<dyn DiagnosticLog>,
}

pub struct ScreenDeps {
    pub views: ViewDeps,
    pub services: ServiceDeps,
    pub policy: PolicyDeps,
    pub obs: ObsDeps,
}

/// スクリーンユースケース
pub struct TreasureScreen {
    store: PointOfInterestStore,
    map: MapScreen,
    selected: Option<PointId>,
    deps: ScreenDeps,
}

impl TreasureScreen {
    pub fn new(canvas: Arc<dyn MapCanvas>, deps: ScreenDeps) -> Self {
        Self {
            store: PointOfInterestStore::new(),
            map: MapScreen::new(canvas),
            selected: None,
            deps,
        }
    }

    /// 組み込みポイントを投入し、初期領域へ寄せて両ビューを描画する
    pub fn startup(&mut self) -> Result<(), Error> {
        for (name, lat, lon, tag) in SEED {
            let point = PointOfInterest::new(
                PointId::new(self.deps.policy.id_gen.generate()),
                *name,
                Coordinate::new(*lat, *lon),
                Some((*tag).to_string()),
            );
            self.store.add(point).map_err(Error::from)?;
        }
        self.map.recenter(INITIAL_CENTER, Some(INITIAL_SPAN_METERS))?;
        self.refresh_views()
    }

    pub fn store(&self) -> &PointOfInterestStore {
        &self.store
    }

    pub fn selected(&self) -> Option<&PointId> {
        self.selected.as_ref()
    }

    /// アクティブフィルタを替え、両ビューを描画し直す
    pub fn set_filter(&mut self, filter: CategoryFilter) -> Result<(), Error> {
        self.store.set_filter(filter);
        self.refresh_views()
    }

    /// 地図タップ: 名前を問い合わせ、確定なら追加して両ビューを描画し直す。
    /// キャンセルと空名は何も変更しない（空名は診断ログのみ）。
    pub fn tap_map(&mut self, coordinate: Coordinate) -> Result<(), Error> {
        let name = match self.deps.policy.name_prompt.ask_name()? {
            Some(name) => name,
            None => return Ok(()),
        };
        let point = PointOfInterest::new(
            PointId::new(self.deps.policy.id_gen.generate()),
            name,
            coordinate,
            Some(DEFAULT_IMAGE_TAG.to_string()),
        );
        match self.store.add(point) {
            Ok(()) => self.refresh_views(),
            Err(StoreError::EmptyName) => {
                self.diag(LogLevel::Warn, "store", "Rejected empty point name");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// スワイプ削除: 境界で visible 長を検証してから取り除く。
    /// 削除したポイントが選択中だったら選択を外す。
    pub fn delete_row(&mut self, visible_index: usize) -> Result<(), Error> {
        if visible_index >= self.store.visible().len() {
            return Err(Error::out_of_range(format!(
                "Row {} is out of range ({} visible rows)",
                visible_index + 1,
                self.store.visible().len()
            )));
        }
        let removed = self.store.remove_at(visible_index).map_err(Error::from)?;
        if self.selected.as_ref() == Some(removed.id()) {
            self.selected = None;
        }
        self.refresh_views()
    }

    /// 行タップ: 選択を記録し、外部ナビゲーションを開く。
    /// 起動失敗は診断ログのみ。
    pub fn open_row(&mut self, visible_index: usize) -> Result<(), Error> {
        let point = self.store.item_at(visible_index).map_err(Error::from)?;
        let destination = point.coordinate();
        self.selected = Some(point.id().clone());
        if let Err(e) = self
            .deps
            .services
            .navigation
            .open_driving_directions(destination)
        {
            self.diag(
                LogLevel::Warn,
                "navigation",
                format!("Failed to open directions: {}", e),
            );
        }
        Ok(())
    }

    /// 選択中のポイントを共有する。未選択・選択が削除済みなら診断ログのみ。
    pub fn share_selected(&mut self) -> Result<(), Error> {
        let id = match &self.selected {
            Some(id) => id.clone(),
            None => {
                self.diag(LogLevel::Info, "share", "Nothing selected to share");
                return Ok(());
            }
        };
        let point = match self.store.find(&id) {
            Some(p) => p.clone(),
            None => {
                self.selected = None;
                self.diag(LogLevel::Info, "share", "Selected point no longer exists");
                return Ok(());
            }
        };
        let text = share_text(&point);
        self.deps.views.share.share(&text)
    }

    /// プレイス検索: 成功なら結果を transient レイヤーに出し、
    /// 外接矩形の中心へ固定スパンで寄る。0 件・失敗は診断ログのみ。
    pub fn search(&mut self, query: &str) -> Result<(), Error> {
        let query = query.trim();
        if query.is_empty() {
            self.diag(LogLevel::Warn, "search", "Empty search query");
            return Ok(());
        }
        let request = SearchRequest::new(query).bias(self.map.region());
        let places = match self.deps.services.places.search(&request) {
            Ok(places) => places,
            Err(e) => {
                self.diag(LogLevel::Warn, "search", format!("Search failed: {}", e));
                return Ok(());
            }
        };
        if places.is_empty() {
            self.diag(
                LogLevel::Info,
                "search",
                format!("No places found for '{}'", query),
            );
            return Ok(());
        }
        self.map.set_transient(&places)?;
        let coords: Vec<Coordinate> = places.iter().map(|p| p.coordinate).collect();
        if let Some(center) = bounding_center(&coords) {
            self.map.recenter(center, Some(SEARCH_SPAN_METERS))?;
        }
        Ok(())
    }

    /// 現在位置の取得: 位置が届いたらスパンを保ったまま寄り、近隣検索を走らせる。
    /// 許可なし・失敗は診断ログのみ。
    pub fn locate(&mut self) -> Result<(), Error> {
        let mut position: Option<Coordinate> = None;
        let mut failure: Option<Error> = None;
        self.deps
            .services
            .location
            .request_location(&mut |event| {
                match event {
                    LocationEvent::Position(c) => position = Some(c),
                    LocationEvent::Denied => {
                        failure = Some(Error::location_denied("Location permission denied"))
                    }
                    LocationEvent::Failed(msg) => {
                        failure = Some(Error::location_failed(format!(
                            "Failed to get user location: {}",
                            msg
                        )))
                    }
                }
                Ok(())
            })?;
        if let Some(e) = failure {
            self.diag(LogLevel::Warn, "location", e.to_string());
            return Ok(());
        }
        let coordinate = match position {
            Some(c) => c,
            None => {
                self.diag(LogLevel::Info, "location", "No position delivered");
                return Ok(());
            }
        };
        self.map.recenter(coordinate, None)?;
        self.nearby()
    }

    /// 検索結果の表示を終え、保存済みポイントへ戻す
    pub fn show_saved(&mut self) -> Result<(), Error> {
        self.map.clear_transient()?;
        self.deps.views.rows.render_rows(self.store.visible())
    }

    /// visible の行を描画し直す
    pub fn list_rows(&self) -> Result<(), Error> {
        self.deps.views.rows.render_rows(self.store.visible())
    }

    /// 近隣検索: 現在の領域でバイアスし、結果は transient レイヤーへ（recenter なし）
    fn nearby(&mut self) -> Result<(), Error> {
        let request = SearchRequest::new(NEARBY_QUERY).bias(self.map.region());
        match self.deps.services.places.search(&request) {
            Ok(places) => self.map.set_transient(&places),
            Err(e) => {
                self.diag(
                    LogLevel::Warn,
                    "search",
                    format!("Nearby search failed: {}", e),
                );
                Ok(())
            }
        }
    }

    /// ストア変更後の共通処理: 行リストと地図の saved レイヤーを同期する
    fn refresh_views(&mut self) -> Result<(), Error> {
        self.deps.views.rows.render_rows(self.store.visible())?;
        self.map.set_saved(self.store.visible())
    }

    fn diag(&self, level: LogLevel, component: &str, message: impl Into<String>) {
        let _ = self
            .deps
            .obs
            .log
            .log(&LogRecord::new(level, message).component(component));
    }
}

/// 共有テキストを組み立てる
pub fn share_text(point: &PointOfInterest) -> String {
    format!(
        "Check out this place: {} at {}, {}",
        point.name(),
        point.coordinate().latitude,
        point.coordinate().longitude
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PointId;

    #[test]
    fn test_share_text_format() {
        let point = PointOfInterest::new(
            PointId::new("p1"),
            "Starbucks",
            Coordinate::new(43.651070, -79.397440),
            Some("starbucks.jpg".to_string()),
        );
        assert_eq!(
            share_text(&point),
            "Check out this place: Starbucks at 43.65107, -79.39744"
        );
    }
}
