use crate::cnemc::missing::{Factor, missing_factors};
use crate::cnemc::model::StationRecord;

/// Station names exempt from alerting, matched exactly against the trimmed
/// `PositionName`.
pub const IGNORED_STATIONS: &[&str] = &["帽峰山", "帽峰山森林公园"];

#[derive(Debug, Clone, PartialEq)]
pub struct ProblemStation {
    pub station: StationRecord,
    pub missing: Vec<Factor>,
}

/// Filters the feed down to non-ignored stations with at least one missing
/// factor, preserving upstream order.
pub fn select_problem_stations(
    stations: Vec<StationRecord>,
    ignored: &[&str],
) -> Vec<ProblemStation> {
    stations
        .into_iter()
        .filter(|station| {
            let name = station.position_name.trim();
            !ignored.contains(&name)
        })
        .filter_map(|station| {
            let missing = missing_factors(&station);
            if missing.is_empty() {
                None
            } else {
                Some(ProblemStation { station, missing })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str, aqi: &str) -> StationRecord {
        StationRecord {
            position_name: name.to_string(),
            aqi: aqi.to_string(),
            pm25: "21".to_string(),
            pm10: "40".to_string(),
            o3: "80".to_string(),
            no2: "12".to_string(),
            so2: "5".to_string(),
            co: "0.6".to_string(),
            ..StationRecord::default()
        }
    }

    #[test]
    fn keeps_only_stations_with_missing_factors() {
        let stations = vec![station("麓湖", "52"), station("体育西", "—")];
        let problems = select_problem_stations(stations, IGNORED_STATIONS);
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].station.position_name, "体育西");
        assert_eq!(problems[0].missing, vec![Factor::Aqi]);
    }

    #[test]
    fn ignored_station_is_excluded_even_with_missing_data() {
        let stations = vec![station("帽峰山森林公园", "—"), station("体育西", "—")];
        let problems = select_problem_stations(stations, IGNORED_STATIONS);
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].station.position_name, "体育西");
    }

    #[test]
    fn ignore_match_trims_the_station_name() {
        let stations = vec![station(" 帽峰山 ", "—")];
        assert!(select_problem_stations(stations, IGNORED_STATIONS).is_empty());
    }

    #[test]
    fn upstream_order_is_preserved() {
        let stations = vec![
            station("c", "—"),
            station("a", "na"),
            station("b", "null"),
        ];
        let problems = select_problem_stations(stations, IGNORED_STATIONS);
        let names: Vec<&str> = problems
            .iter()
            .map(|p| p.station.position_name.as_str())
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
    }
}
