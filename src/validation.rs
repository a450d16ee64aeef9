// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request field validation.
//!
//! These checks run in the HTTP layer before any store access, so a
//! malformed request never reaches the database.

use crate::error::{AppError, Result};
use crate::time_utils::DATE_FORMAT;
use chrono::NaiveDate;
use std::num::IntErrorKind;

/// Length of a hex-encoded document identifier.
pub const ID_LEN: usize = 24;

/// Check a `YYYY-MM-DD` date string.
///
/// Returns `None` when the input is missing or empty, `Some(false)` when it
/// is not in `YYYY-MM-DD` shape or names an impossible calendar date
/// (`2023-02-30`), and `Some(true)` otherwise.
pub fn is_valid_date(input: Option<&str>) -> Option<bool> {
    let s = input.filter(|s| !s.is_empty())?;
    Some(parse_calendar_date(s).is_some())
}

/// Check that `s` is a 24-character hexadecimal identifier.
pub fn is_valid_id(s: &str) -> bool {
    s.len() == ID_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Validate a user id path segment.
pub fn require_valid_id(id: &str) -> Result<()> {
    if is_valid_id(id) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Invalid '_id': expected {} hex characters",
            ID_LEN
        )))
    }
}

/// Parse an optional date field. Empty input counts as absent.
pub fn parse_date(field: &str, input: Option<&str>) -> Result<Option<NaiveDate>> {
    match input.filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => parse_calendar_date(s).map(Some).ok_or_else(|| {
            AppError::Validation(format!("Invalid '{}': expected YYYY-MM-DD", field))
        }),
    }
}

/// Parse an exercise duration. The whole input must be a finite,
/// non-negative number.
pub fn parse_duration(input: Option<&str>) -> Result<f64> {
    let raw = input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("'duration' is required".to_string()))?;

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(AppError::Validation(
            "Invalid 'duration': must be a non-negative number".to_string(),
        )),
    }
}

/// Parse an optional log limit. Must be a non-negative integer when given;
/// values too large for `usize` saturate.
pub fn parse_limit(input: Option<&str>) -> Result<Option<usize>> {
    let Some(s) = input.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    match s.parse::<usize>() {
        Ok(limit) => Ok(Some(limit)),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Some(usize::MAX)),
        Err(_) => Err(AppError::Validation(
            "Invalid 'limit': must be a non-negative integer".to_string(),
        )),
    }
}

/// Shape check then round-trip through the parser, which rejects dates
/// like `2023-02-30` that chrono will not construct.
fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return None;
    }

    let date = NaiveDate::parse_from_str(s, DATE_FORMAT).ok()?;
    (date.format(DATE_FORMAT).to_string() == s).then_some(date)
}
