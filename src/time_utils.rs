// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date formatting.

use chrono::{NaiveDate, Utc};

/// Wire format for dates in requests and stored documents.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date for API responses, e.g. `Thu Jan 05 2023`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Current calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_date() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
        assert_eq!(format_display_date(date), "Thu Jan 05 2023");

        let date = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
        assert_eq!(format_display_date(date), "Thu Dec 31 2020");
    }
}
