use serde::{Deserialize, Serialize};

/// One station's reading snapshot as published by the CNEMC feed.
///
/// Every measurement arrives as raw text: the upstream emits placeholder
/// tokens (`—`, `N/A`, empty string, ...) instead of omitting values, so the
/// fields stay `String` and classification happens downstream. `default`
/// keeps records decodable when the feed drops a key entirely.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationRecord {
    #[serde(default)]
    pub position_name: String,
    #[serde(default)]
    pub quality: String,
    #[serde(rename = "AQI", default)]
    pub aqi: String,
    #[serde(rename = "O3", default)]
    pub o3: String,
    #[serde(rename = "NO2", default)]
    pub no2: String,
    #[serde(rename = "PM10", default)]
    pub pm10: String,
    #[serde(rename = "PM2_5", default)]
    pub pm25: String,
    #[serde(rename = "SO2", default)]
    pub so2: String,
    #[serde(rename = "CO", default)]
    pub co: String,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    #[serde(default)]
    pub time_point: String,
    #[serde(default)]
    pub station_code: String,
    #[serde(default)]
    pub primary_pollutant: String,
}
