//! Time helpers - UTC date and timestamp conversions
//!
//! Date → timestamp conversion happens at the API handler layer; store
//! functions only ever receive `i64` Unix millis.

use chrono::NaiveDate;

use crate::db::store::{RepoError, RepoResult};

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> RepoResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| RepoError::Validation(format!("Invalid date format: {date}")))
}

/// UTC calendar date of a Unix-milli timestamp
pub fn date_of_millis(millis: i64) -> NaiveDate {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

/// Start of a UTC day (00:00:00) in Unix millis
pub fn day_start_millis(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp_millis()
}

/// Last Unix milli of a UTC day (23:59:59.999), for inclusive range bounds
pub fn day_end_millis(date: NaiveDate) -> i64 {
    day_start_millis(date + chrono::Duration::days(1)) - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_bounds_are_inclusive_and_adjacent() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let next = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        assert_eq!(day_end_millis(date) + 1, day_start_millis(next));
    }

    #[test]
    fn date_round_trips_through_millis() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        assert_eq!(date_of_millis(day_start_millis(date)), date);
        assert_eq!(date_of_millis(day_end_millis(date)), date);
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_date("2026-13-01").is_err());
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("2026-03-14").is_ok());
    }
}
