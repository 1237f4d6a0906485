//! Gini indicator records from World Bank style JSON payloads
//!
//! A payload is a JSON array. The usual shape is `[pagination, records]`;
//! the API also answers with `[pagination, null]`, `[{"total": 0}]`, or an
//! error envelope `[{"message": [{"value": "..."}]}]`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected payload shape: {0}")]
    UnexpectedShape(String),

    #[error("indicator API error:\n{0}")]
    Api(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiniRecord {
    pub country: String,
    pub year: i32,
    pub value: Option<f64>,
}

impl GiniRecord {
    /// Parse one entry of the record list. Entries without a numeric year
    /// are skipped.
    fn from_value(entry: &Value) -> Option<Self> {
        let obj = entry.as_object()?;
        let year: i32 = match obj.get("date")? {
            Value::String(s) => s.trim().parse().ok()?,
            Value::Number(n) => i32::try_from(n.as_i64()?).ok()?,
            _ => return None,
        };
        let value: Option<f64> = match obj.get("value") {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        };
        let country = obj
            .get("country")
            .and_then(|c| c.get("value"))
            .and_then(Value::as_str)
            .unwrap_or("N/A")
            .to_string();
        Some(Self { country, year, value })
    }
}

const NO_DATA_MARKERS: [&str; 2] = ["No data available", "No matches"];

pub fn parse_indicator_response(json: &str) -> Result<Vec<GiniRecord>, RecordsError> {
    let payload: Value = serde_json::from_str(json)?;
    let parts = payload
        .as_array()
        .filter(|parts| !parts.is_empty())
        .ok_or_else(|| RecordsError::UnexpectedShape("expected a non-empty array".to_string()))?;

    if let Some(messages) = parts[0].get("message").and_then(Value::as_array) {
        let texts: Vec<&str> = messages
            .iter()
            .map(|m| m.get("value").and_then(Value::as_str).unwrap_or("unknown error"))
            .collect();
        if texts.iter().any(|t| NO_DATA_MARKERS.iter().any(|marker| t.contains(marker))) {
            debug!("indicator API reports no data");
            return Ok(Vec::new());
        }
        return Err(RecordsError::Api(texts.join("\n")));
    }

    match parts.as_slice() {
        [_, Value::Null] => Ok(Vec::new()),
        [_, Value::Array(entries)] => Ok(entries.iter().filter_map(GiniRecord::from_value).collect()),
        [_, other] => Err(RecordsError::UnexpectedShape(format!(
            "record list is not an array: {other}"
        ))),
        [only] if only.get("total").and_then(Value::as_u64) == Some(0) => Ok(Vec::new()),
        _ => {
            warn!(parts = parts.len(), "unhandled payload shape, assuming no data");
            Ok(Vec::new())
        }
    }
}

/// The record with the most recent year that carries a value.
///
/// On equal years the earlier record wins.
pub fn find_latest_valid_gini(records: &[GiniRecord]) -> Option<&GiniRecord> {
    records
        .iter()
        .filter(|r| r.value.is_some())
        .fold(None, |best: Option<&GiniRecord>, r| match best {
            Some(b) if b.year >= r.year => Some(b),
            _ => Some(r),
        })
}

/// Records carrying a value, oldest year first. Equal years keep their
/// payload order.
pub fn valid_history(records: &[GiniRecord]) -> Vec<&GiniRecord> {
    let mut history: Vec<&GiniRecord> = records.iter().filter(|r| r.value.is_some()).collect();
    history.sort_by_key(|r| r.year);
    history
}
