//! プレイス検索プロバイダの抽象
//!
//! 上流サービスは不透明な境界として扱う。呼び出しは同期で、
//! 1 リクエストにつき 1 応答。結果は名前と座標のみの候補列。

use crate::error::Error;
use crate::geo::{Coordinate, Region};
use serde::{Deserialize, Serialize};

/// 既定の最大候補数
pub const DEFAULT_LIMIT: usize = 10;

/// 検索候補のプレイス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub coordinate: Coordinate,
}

impl Place {
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }
}

/// 検索リクエスト（自由文クエリと任意のバイアス領域）
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub bias: Option<Region>,
    pub limit: usize,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            bias: None,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn bias(mut self, region: Region) -> Self {
        self.bias = Some(region);
        self
    }
}

/// プレイス検索プロバイダのトレイト
///
/// 実装は `NominatimProvider`（HTTP）や `FixedPlacesProvider`（固定応答）など。
pub trait PlaceSearchProvider: Send + Sync {
    fn name(&self) -> &str;

    /// 検索を実行して候補一覧を返す。0 件は Ok(vec![])。
    /// 上流の失敗は SearchFailed、応答の解析失敗は Json。
    fn search(&self, request: &SearchRequest) -> Result<Vec<Place>, Error>;
}
