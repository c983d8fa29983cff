//! PointOfInterestStore: 保存済みポイントの全列とフィルタ済み visible 列
//!
//! 不変条件: `visible` は常に `all` をアクティブフィルタで絞った列（元の順序）に
//! 一致する。`all` の変更・フィルタ変更のたびに同期的に再計算し、
//! 古い visible を残さない。

use crate::domain::category::CategoryFilter;
use crate::domain::point::{PointId, PointOfInterest};
use common::error::Error;

/// ストア操作のエラー（ドメイン層）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Row {index} is out of range ({len} visible rows)")]
    OutOfRange { index: usize, len: usize },
    #[error("Point name must not be empty")]
    EmptyName,
}

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::OutOfRange { .. } => Error::out_of_range(e.to_string()),
            StoreError::EmptyName => Error::empty_input(e.to_string()),
        }
    }
}

/// 保存済みポイントのストア
#[derive(Debug, Clone, Default)]
pub struct PointOfInterestStore {
    all: Vec<PointOfInterest>,
    visible: Vec<PointOfInterest>,
    filter: CategoryFilter,
}

impl PointOfInterestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// ポイントを末尾に追加する。空の名前は何も変更せず EmptyName。
    pub fn add(&mut self, point: PointOfInterest) -> Result<(), StoreError> {
        if point.name().is_empty() {
            return Err(StoreError::EmptyName);
        }
        self.all.push(point);
        self.recompute();
        Ok(())
    }

    /// visible 上の位置で対象を特定し、`all` から取り除いて返す。
    /// 範囲外は何も変更せず OutOfRange。
    pub fn remove_at(&mut self, visible_index: usize) -> Result<PointOfInterest, StoreError> {
        let target = self
            .visible
            .get(visible_index)
            .ok_or(StoreError::OutOfRange {
                index: visible_index,
                len: self.visible.len(),
            })?
            .id()
            .clone();
        let pos = self
            .all
            .iter()
            .position(|p| *p.id() == target)
            .ok_or(StoreError::OutOfRange {
                index: visible_index,
                len: self.visible.len(),
            })?;
        let removed = self.all.remove(pos);
        self.recompute();
        Ok(removed)
    }

    /// アクティブフィルタを置き換えて visible を再計算する。`all` は変えない。
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.recompute();
    }

    /// visible 上の位置で読み出す。範囲外は OutOfRange。
    pub fn item_at(&self, visible_index: usize) -> Result<&PointOfInterest, StoreError> {
        self.visible
            .get(visible_index)
            .ok_or(StoreError::OutOfRange {
                index: visible_index,
                len: self.visible.len(),
            })
    }

    /// IDで探す（`all` 全体から）
    pub fn find(&self, id: &PointId) -> Option<&PointOfInterest> {
        self.all.iter().find(|p| p.id() == id)
    }

    pub fn all(&self) -> &[PointOfInterest] {
        &self.all
    }

    pub fn visible(&self) -> &[PointOfInterest] {
        &self.visible
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    fn recompute(&mut self) {
        self.visible = self
            .all
            .iter()
            .filter(|p| self.filter.matches(p.name()))
            .cloned()
            .collect();
    }
}
