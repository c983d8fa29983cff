//! プロバイダファクトリー
//!
//! プロバイダタイプに基づいて適切なプレイス検索プロバイダを作成する。

use crate::places::fixed::FixedPlacesProvider;
use crate::places::nominatim::NominatimProvider;
use crate::places::provider::PlaceSearchProvider;
use std::sync::Arc;

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// Nominatim (OpenStreetMap) HTTP 検索
    Nominatim,
    /// 固定応答（ネットワーク不要）
    Fixed,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nominatim" | "osm" => Some(Self::Nominatim),
            "fixed" | "offline" => Some(Self::Fixed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nominatim => "nominatim",
            Self::Fixed => "fixed",
        }
    }
}

/// プロバイダを作成する
pub fn create_provider(
    provider_type: ProviderType,
    base_url: Option<String>,
) -> Arc<dyn PlaceSearchProvider> {
    match provider_type {
        ProviderType::Nominatim => Arc::new(NominatimProvider::new(base_url)),
        ProviderType::Fixed => Arc::new(FixedPlacesProvider::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_provider_type() {
        assert_eq!(ProviderType::parse("nominatim"), Some(ProviderType::Nominatim));
        assert_eq!(ProviderType::parse("OSM"), Some(ProviderType::Nominatim));
        assert_eq!(ProviderType::parse("fixed"), Some(ProviderType::Fixed));
        assert_eq!(ProviderType::parse("offline"), Some(ProviderType::Fixed));
        assert_eq!(ProviderType::parse("bing"), None);
    }

    #[test]
    fn test_create_provider_names() {
        assert_eq!(create_provider(ProviderType::Fixed, None).name(), "fixed");
        assert_eq!(
            create_provider(ProviderType::Nominatim, None).name(),
            "nominatim"
        );
    }
}
