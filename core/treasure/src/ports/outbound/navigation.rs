//! 外部ナビゲーション Outbound ポート

use common::error::Error;
use common::geo::Coordinate;

/// 外部地図アプリで経路案内を開く能力（Outbound ポート）
///
/// 失敗は LaunchFailed として返し、呼び出し側は診断ログに流すだけにする。
pub trait NavigationLauncher: Send + Sync {
    fn open_driving_directions(&self, destination: Coordinate) -> Result<(), Error>;
}
