//! 固定応答のプレイス検索プロバイダ
//!
//! ネットワークを使わず、組み込みの候補から名前の部分一致で返す。
//! デモ・オフライン実行・テスト用。

use crate::error::Error;
use crate::geo::Coordinate;
use crate::places::provider::{Place, PlaceSearchProvider, SearchRequest};

/// 固定応答プロバイダ
pub struct FixedPlacesProvider {
    entries: Vec<Place>,
}

impl FixedPlacesProvider {
    /// トロント近辺の組み込み候補で作る
    pub fn new() -> Self {
        Self::with_entries(vec![
            Place::new(
                "Golden Dragon Restaurant",
                Coordinate::new(43.6532, -79.3985),
            ),
            Place::new("Queen West Restaurant", Coordinate::new(43.6479, -79.4004)),
            Place::new("Harbourfront Cafe", Coordinate::new(43.6387, -79.3816)),
            Place::new("Union Station Coffee", Coordinate::new(43.6453, -79.3806)),
            Place::new("Kensington Market Grill", Coordinate::new(43.6547, -79.4025)),
        ])
    }

    pub fn with_entries(entries: Vec<Place>) -> Self {
        Self { entries }
    }
}

impl Default for FixedPlacesProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceSearchProvider for FixedPlacesProvider {
    fn name(&self) -> &str {
        "fixed"
    }

    fn search(&self, request: &SearchRequest) -> Result<Vec<Place>, Error> {
        let needle = request.query.to_lowercase();
        let matches: Vec<Place> = self
            .entries
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .take(request.limit)
            .cloned()
            .collect();
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_matches_case_insensitive() {
        let provider = FixedPlacesProvider::new();
        let places = provider
            .search(&SearchRequest::new("RESTAURANT"))
            .unwrap();
        assert_eq!(places.len(), 2);
        assert!(places.iter().all(|p| p.name.to_lowercase().contains("restaurant")));
    }

    #[test]
    fn test_search_no_match_is_empty_ok() {
        let provider = FixedPlacesProvider::new();
        let places = provider.search(&SearchRequest::new("zzz")).unwrap();
        assert!(places.is_empty());
    }

    #[test]
    fn test_search_honors_limit() {
        let provider = FixedPlacesProvider::new();
        let mut request = SearchRequest::new("e");
        request.limit = 2;
        let places = provider.search(&request).unwrap();
        assert_eq!(places.len(), 2);
    }
}
