//! 地理プリミティブ
//!
//! 緯度経度座標と、中心＋スパン（メートル）で表す表示領域。
//! CLI や環境変数から受け取る "lat,lon" 文字列の解析もここに置く。

use crate::error::Error;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// 緯度経度座標（度）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// 表示領域（中心座標とスパン）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Coordinate,
    pub span_meters: f64,
}

impl Region {
    pub const fn new(center: Coordinate, span_meters: f64) -> Self {
        Self {
            center,
            span_meters,
        }
    }
}

fn lat_lon_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)\s*$").expect("valid pattern")
    })
}

/// "lat,lon" 形式の文字列を座標に解析する（例: "43.65, -79.38"）。
/// 形式不正・範囲外（緯度 ±90、経度 ±180）は InvalidArgument。
pub fn parse_lat_lon(s: &str) -> Result<Coordinate, Error> {
    let caps = lat_lon_pattern()
        .captures(s)
        .ok_or_else(|| Error::invalid_argument(format!("Expected \"lat,lon\", got \"{}\"", s)))?;
    let latitude: f64 = caps[1]
        .parse()
        .map_err(|_| Error::invalid_argument(format!("Invalid latitude: {}", &caps[1])))?;
    let longitude: f64 = caps[2]
        .parse()
        .map_err(|_| Error::invalid_argument(format!("Invalid longitude: {}", &caps[2])))?;
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_argument(format!(
            "Latitude {} is outside [-90, 90]",
            latitude
        )));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_argument(format!(
            "Longitude {} is outside [-180, 180]",
            longitude
        )));
    }
    Ok(Coordinate::new(latitude, longitude))
}

/// 座標群の外接矩形の中心。空列には None。
pub fn bounding_center(coords: &[Coordinate]) -> Option<Coordinate> {
    let first = coords.first()?;
    let mut min_lat = first.latitude;
    let mut max_lat = first.latitude;
    let mut min_lon = first.longitude;
    let mut max_lon = first.longitude;
    for c in &coords[1..] {
        min_lat = min_lat.min(c.latitude);
        max_lat = max_lat.max(c.latitude);
        min_lon = min_lon.min(c.longitude);
        max_lon = max_lon.max(c.longitude);
    }
    Some(Coordinate::new(
        (min_lat + max_lat) / 2.0,
        (min_lon + max_lon) / 2.0,
    ))
}
