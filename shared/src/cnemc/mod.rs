pub mod decode;
pub mod missing;
pub mod model;
pub mod select;

pub use decode::{DecodeError, decode_stations};
pub use missing::{Factor, has_missing_data, is_missing_value, missing_factors};
pub use model::StationRecord;
pub use select::{IGNORED_STATIONS, ProblemStation, select_problem_stations};

/// Live AQI publishing feed for Guangzhou (cityName=广州市, percent-encoded).
pub const AQI_PUBLISH_LIVE_ENDPOINT: &str =
    "https://air.cnemc.cn:18007/CityData/GetAQIDataPublishLive?cityName=%E5%B9%BF%E5%B7%9E%E5%B8%82";
