//! 保存済みポイント（名前付き座標）のドメイン型

use common::geo::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 生成時に割り当てる不透明な安定ID
///
/// 行番号（index）はフィルタ変更・削除で無効になるため、
/// 選択や削除対象の同一性は常にこのIDで扱う。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointId(String);

impl PointId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 保存済みポイント
///
/// 名前の非空は `PointOfInterestStore::add` が保証する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    id: PointId,
    name: String,
    coordinate: Coordinate,
    image_tag: Option<String>,
}

impl PointOfInterest {
    pub fn new(
        id: PointId,
        name: impl Into<String>,
        coordinate: Coordinate,
        image_tag: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            coordinate,
            image_tag,
        }
    }

    pub fn id(&self) -> &PointId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn image_tag(&self) -> Option<&str> {
        self.image_tag.as_deref()
    }
}
