//! treasure 共通ライブラリ
//!
//! `treasure` コマンドから使われるインフラを提供する。
//! エラー型・地理プリミティブ・構造化ログ・プレイス検索クライアントなど。

/// エラーハンドリング
pub mod error;

/// 地理プリミティブ（座標・領域・"lat,lon" 解析）
pub mod geo;

/// プレイス検索プロバイダ（上流サービスのクライアント群）
pub mod places;

/// ポイントID生成（固定長・辞書順＝生成順）
pub mod point_id;

/// Outbound ポート（FS・サブプロセス・ログ）
pub mod ports;

/// 標準アダプタ実装
pub mod adapter;
