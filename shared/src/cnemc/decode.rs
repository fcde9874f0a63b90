use crate::cnemc::model::StationRecord;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no station array found in response body")]
    UnrecognizedShape,
}

/// Wrapper keys the feed has been observed to use, in priority order.
const WRAPPER_KEYS: [&str; 8] = [
    "Data", "data", "Rows", "rows", "Table", "table", "records", "Records",
];

/// Decodes the upstream body into station records.
///
/// The feed's top-level shape is not stable: sometimes a bare array,
/// sometimes an object wrapping the array under a conventional key, and
/// occasionally an object whose only array member carries the stations under
/// some other name. Attempts are made in that order; the final scan iterates
/// `serde_json`'s BTreeMap, so it is deterministic for a given body.
pub fn decode_stations(raw: &[u8]) -> Result<Vec<StationRecord>, DecodeError> {
    if let Ok(stations) = serde_json::from_slice::<Vec<StationRecord>>(raw) {
        return Ok(stations);
    }

    let object: Map<String, Value> = serde_json::from_slice(raw)?;

    for key in WRAPPER_KEYS {
        if let Some(value) = object.get(key)
            && let Ok(stations) = serde_json::from_value::<Vec<StationRecord>>(value.clone())
        {
            return Ok(stations);
        }
    }

    for value in object.values() {
        if value.is_array()
            && let Ok(stations) = serde_json::from_value::<Vec<StationRecord>>(value.clone())
        {
            return Ok(stations);
        }
    }

    Err(DecodeError::UnrecognizedShape)
}
