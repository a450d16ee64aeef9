// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise entry model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use crate::time_utils::format_display_date;

/// Exercise entry embedded in a user document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// Entry identifier, unique within the store
    pub id: String,
    pub description: String,
    /// Duration in minutes
    pub duration: f64,
    /// Calendar date (stored as `YYYY-MM-DD`)
    pub date: NaiveDate,
}

/// One row of a user's exercise log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub description: String,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    /// Human-readable date, e.g. `Thu Jan 05 2023`
    pub date: String,
}

impl From<&ExerciseRecord> for LogEntry {
    fn from(record: &ExerciseRecord) -> Self {
        Self {
            description: record.description.clone(),
            duration: record.duration,
            date: format_display_date(record.date),
        }
    }
}

/// Response for a newly logged exercise: the entry merged with its owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    pub date: String,
    #[serde(rename = "_id")]
    pub id: String,
}

/// Emit whole-number durations as JSON integers (`30`, not `30.0`).
pub fn serialize_duration<S: Serializer>(
    duration: &f64,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let whole = duration.fract() == 0.0 && duration.abs() < i64::MAX as f64;
    if whole {
        serializer.serialize_i64(*duration as i64)
    } else {
        serializer.serialize_f64(*duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(duration: f64) -> ExerciseRecord {
        ExerciseRecord {
            id: "0123456789abcdef01234567".to_string(),
            description: "run".to_string(),
            duration,
            date: NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
        }
    }

    #[test]
    fn test_log_entry_shape() {
        let json = serde_json::to_value(LogEntry::from(&record(30.0))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "description": "run",
                "duration": 30,
                "date": "Thu Jan 05 2023"
            })
        );
    }

    #[test]
    fn test_fractional_duration_kept() {
        let json = serde_json::to_string(&LogEntry::from(&record(12.5))).unwrap();
        assert!(json.contains("\"duration\":12.5"), "{json}");
    }

    #[test]
    fn test_stored_date_format() {
        let json = serde_json::to_value(record(1.0)).unwrap();
        assert_eq!(json["date"], "2023-01-05");
    }
}
