//! Nominatim (OpenStreetMap) プレイス検索プロバイダ
//!
//! GET /search?q=...&format=jsonv2 を呼び、display_name / lat / lon を取り出す。
//! バイアス領域は viewbox（bounded なし）として渡す。
//! ベース URL は環境変数 TREASURE_PLACES_URL で上書きできる。

use crate::error::Error;
use crate::geo::Region;
use crate::places::provider::{Place, PlaceSearchProvider, SearchRequest};
use serde_json::Value;
use std::env;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const USER_AGENT: &str = "treasure/0.1";

/// 緯度 1 度あたりの概算メートル数
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Nominatim プロバイダ
pub struct NominatimProvider {
    base_url: String,
}

impl NominatimProvider {
    /// ベース URL は引数 > TREASURE_PLACES_URL > 既定値の順で決める。
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .or_else(|| env::var("TREASURE_PLACES_URL").ok().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl PlaceSearchProvider for NominatimProvider {
    fn name(&self) -> &str {
        "nominatim"
    }

    fn search(&self, request: &SearchRequest) -> Result<Vec<Place>, Error> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        let limit = request.limit.to_string();
        let mut params: Vec<(&str, String)> = vec![
            ("q", request.query.clone()),
            ("format", "jsonv2".to_string()),
            ("limit", limit),
        ];
        if let Some(region) = &request.bias {
            params.push(("viewbox", viewbox(region)));
        }

        let client = reqwest::blocking::Client::new();
        let response = client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .query(&params)
            .send()
            .map_err(|e| Error::search_failed(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| Error::search_failed(format!("Failed to read response: {}", e)))?;
        if !status.is_success() {
            return Err(Error::search_failed(format!(
                "Nominatim error: HTTP {}: {}",
                status, text
            )));
        }

        parse_search_response(&text)
    }
}

/// Region を Nominatim の viewbox（lon1,lat1,lon2,lat2）に変換する
fn viewbox(region: &Region) -> String {
    let half_lat = region.span_meters / 2.0 / METERS_PER_DEGREE;
    let lat_rad = region.center.latitude.to_radians();
    let half_lon = half_lat / lat_rad.cos().abs().max(0.01);
    format!(
        "{},{},{},{}",
        region.center.longitude - half_lon,
        region.center.latitude + half_lat,
        region.center.longitude + half_lon,
        region.center.latitude - half_lat,
    )
}

/// 応答 JSON（配列）を候補列に変換する
fn parse_search_response(text: &str) -> Result<Vec<Place>, Error> {
    let v: Value = serde_json::from_str(text)
        .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;
    let items = v
        .as_array()
        .ok_or_else(|| Error::json("Expected a JSON array response"))?;

    let mut places = Vec::with_capacity(items.len());
    for item in items {
        let name = item["display_name"]
            .as_str()
            .or_else(|| item["name"].as_str())
            .unwrap_or("(unnamed)")
            .to_string();
        let latitude = parse_f64_field(item, "lat")?;
        let longitude = parse_f64_field(item, "lon")?;
        places.push(Place::new(
            name,
            crate::geo::Coordinate::new(latitude, longitude),
        ));
    }
    Ok(places)
}

/// lat / lon は文字列か数値のどちらでも来る
fn parse_f64_field(item: &Value, key: &str) -> Result<f64, Error> {
    match &item[key] {
        Value::String(s) => s
            .parse::<f64>()
            .map_err(|_| Error::json(format!("Invalid {} in response: {}", key, s))),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| Error::json(format!("Invalid {} in response", key))),
        _ => Err(Error::json(format!("Missing {} in response item", key))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{Coordinate, Region};

    #[test]
    fn test_parse_search_response() {
        let text = r#"[
            {"display_name": "Tim Hortons, Yonge Street, Toronto", "lat": "43.657703", "lon": "-79.384209"},
            {"display_name": "Starbucks, Queen Street, Toronto", "lat": 43.65107, "lon": -79.39744}
        ]"#;
        let places = parse_search_response(text).unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].name, "Tim Hortons, Yonge Street, Toronto");
        assert_eq!(places[0].coordinate.latitude, 43.657703);
        assert_eq!(places[1].coordinate.longitude, -79.39744);
    }

    #[test]
    fn test_parse_search_response_empty() {
        assert!(parse_search_response("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_search_response_rejects_non_array() {
        assert!(parse_search_response(r#"{"error": "rate limited"}"#).is_err());
        assert!(parse_search_response("not json").is_err());
    }

    #[test]
    fn test_parse_search_response_rejects_bad_lat() {
        let text = r#"[{"display_name": "x", "lat": "north", "lon": "-79.0"}]"#;
        assert!(parse_search_response(text).is_err());
    }

    #[test]
    fn test_viewbox_surrounds_center() {
        let region = Region::new(Coordinate::new(43.65, -79.38), 2000.0);
        let box_ = viewbox(&region);
        let parts: Vec<f64> = box_.split(',').map(|s| s.parse().unwrap()).collect();
        assert_eq!(parts.len(), 4);
        // lon1 < center lon < lon2, lat2 < center lat < lat1
        assert!(parts[0] < -79.38 && -79.38 < parts[2]);
        assert!(parts[3] < 43.65 && 43.65 < parts[1]);
    }
}
