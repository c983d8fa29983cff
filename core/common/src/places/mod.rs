//! プレイス検索プロバイダ
//!
//! 上流のプレイス検索サービス（ジオコーダ）のクライアント群。
//! 共通の trait と、HTTP 実装（Nominatim）・固定応答実装・ファクトリーを提供する。

pub mod factory;
pub mod fixed;
pub mod nominatim;
pub mod provider;

pub use factory::{create_provider, ProviderType};
pub use fixed::FixedPlacesProvider;
pub use nominatim::NominatimProvider;
pub use provider::{Place, PlaceSearchProvider, SearchRequest};
