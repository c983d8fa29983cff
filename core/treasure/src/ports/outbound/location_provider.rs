//! 位置情報 Outbound ポート
//!
//! 1 回の要求につき高々 1 回の位置イベントをコールバックで届ける。

use common::error::Error;
use common::geo::Coordinate;

/// 位置要求の結果イベント
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEvent {
    /// 現在位置（1 要求につき高々 1 回）
    Position(Coordinate),
    /// 利用許可が得られていない
    Denied,
    /// 取得失敗
    Failed(String),
}

/// 位置情報プロバイダ抽象（Outbound ポート）
///
/// 実装は `adapter::EnvLocationProvider` やテスト用のスタブなど。
pub trait LocationProvider: Send + Sync {
    fn request_location(
        &self,
        callback: &mut dyn FnMut(LocationEvent) -> Result<(), Error>,
    ) -> Result<(), Error>;
}
