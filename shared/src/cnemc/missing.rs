use crate::cnemc::model::StationRecord;
use std::fmt::{Display, Formatter};

/// Alert factors in the canonical reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    Aqi,
    Pm25,
    Pm10,
    O3,
    No2,
    So2,
    Co,
}

impl Factor {
    pub const ALL: [Factor; 7] = [
        Factor::Aqi,
        Factor::Pm25,
        Factor::Pm10,
        Factor::O3,
        Factor::No2,
        Factor::So2,
        Factor::Co,
    ];

    pub fn value_of<'a>(&self, station: &'a StationRecord) -> &'a str {
        match self {
            Factor::Aqi => &station.aqi,
            Factor::Pm25 => &station.pm25,
            Factor::Pm10 => &station.pm10,
            Factor::O3 => &station.o3,
            Factor::No2 => &station.no2,
            Factor::So2 => &station.so2,
            Factor::Co => &station.co,
        }
    }
}

impl Display for Factor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Factor::Aqi => write!(f, "AQI"),
            Factor::Pm25 => write!(f, "PM2.5"),
            Factor::Pm10 => write!(f, "PM10"),
            Factor::O3 => write!(f, "O3"),
            Factor::No2 => write!(f, "NO2"),
            Factor::So2 => write!(f, "SO2"),
            Factor::Co => write!(f, "CO"),
        }
    }
}

/// Recognizes the placeholder conventions the feed uses for "no data".
///
/// The substring checks are deliberately permissive: the upstream mixes
/// exact placeholder tokens with markers embedded in otherwise non-empty
/// values. A legitimate reading that embeds `—` in adjacent metadata would
/// be misclassified; not observed in practice, kept for compatibility.
pub fn is_missing_value(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return true;
    }
    let lower = trimmed.to_lowercase();
    if matches!(lower.as_str(), "-" | "—" | "na" | "n/a" | "null") {
        return true;
    }
    raw.contains('—') || raw.contains("缺失")
}

/// Factors whose reading classifies as missing, in canonical order.
pub fn missing_factors(station: &StationRecord) -> Vec<Factor> {
    Factor::ALL
        .into_iter()
        .filter(|factor| is_missing_value(factor.value_of(station)))
        .collect()
}

pub fn has_missing_data(station: &StationRecord) -> bool {
    Factor::ALL
        .iter()
        .any(|factor| is_missing_value(factor.value_of(station)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_tokens_classify_as_missing() {
        for value in ["", "  ", "-", "—", "NA", "na", "N/A", "null", "NULL"] {
            assert!(is_missing_value(value), "value {value:?}");
        }
    }

    #[test]
    fn embedded_markers_classify_as_missing() {
        assert!(is_missing_value("12—3"));
        assert!(is_missing_value("数据缺失"));
    }

    #[test]
    fn numeric_readings_classify_as_present() {
        for value in ["35", "0", "1.2", "优"] {
            assert!(!is_missing_value(value), "value {value:?}");
        }
    }

    #[test]
    fn station_with_one_missing_factor_has_missing_data() {
        let station = StationRecord {
            aqi: "52".to_string(),
            pm25: "—".to_string(),
            pm10: "40".to_string(),
            o3: "80".to_string(),
            no2: "12".to_string(),
            so2: "5".to_string(),
            co: "0.6".to_string(),
            ..StationRecord::default()
        };
        assert!(has_missing_data(&station));
        assert_eq!(missing_factors(&station), vec![Factor::Pm25]);
    }

    #[test]
    fn fully_reported_station_has_no_missing_data() {
        let station = StationRecord {
            aqi: "52".to_string(),
            pm25: "21".to_string(),
            pm10: "40".to_string(),
            o3: "80".to_string(),
            no2: "12".to_string(),
            so2: "5".to_string(),
            co: "0.6".to_string(),
            ..StationRecord::default()
        };
        assert!(!has_missing_data(&station));
        assert!(missing_factors(&station).is_empty());
    }

    #[test]
    fn factors_report_in_canonical_order() {
        let station = StationRecord {
            aqi: "—".to_string(),
            pm25: "".to_string(),
            pm10: "40".to_string(),
            o3: "80".to_string(),
            no2: "12".to_string(),
            so2: "n/a".to_string(),
            co: "0.6".to_string(),
            ..StationRecord::default()
        };
        assert_eq!(
            missing_factors(&station),
            vec![Factor::Aqi, Factor::Pm25, Factor::So2]
        );
    }

    #[test]
    fn factor_labels_render_canonically() {
        let labels: Vec<String> = Factor::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["AQI", "PM2.5", "PM10", "O3", "NO2", "SO2", "CO"]);
    }
}
