//! 環境変数から位置を届ける LocationProvider 実装
//!
//! TREASURE_LOCATION="lat,lon" が設定されていれば Position を 1 回届け、
//! 未設定なら Denied を届ける。CLI における端末位置サービスの代替。

use crate::ports::outbound::{LocationEvent, LocationProvider};
use common::error::Error;
use common::geo::parse_lat_lon;
use std::env;

/// 環境変数ベースの LocationProvider 実装
#[derive(Debug, Clone, Default)]
pub struct EnvLocationProvider;

impl LocationProvider for EnvLocationProvider {
    fn request_location(
        &self,
        callback: &mut dyn FnMut(LocationEvent) -> Result<(), Error>,
    ) -> Result<(), Error> {
        let raw = match env::var("TREASURE_LOCATION") {
            Ok(s) if !s.is_empty() => s,
            _ => return callback(LocationEvent::Denied),
        };
        match parse_lat_lon(&raw) {
            Ok(coordinate) => callback(LocationEvent::Position(coordinate)),
            Err(e) => callback(LocationEvent::Failed(format!("TREASURE_LOCATION: {}", e))),
        }
    }
}
