//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::{DateTime, Utc};

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats a Unix timestamp (seconds) for the admin tables, in UTC.
///
/// Usage in templates: `{{ row.created_at.timestamp()|admin_date }}`
#[askama::filter_fn]
pub fn admin_date(timestamp: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let seconds: i64 = timestamp
        .to_string()
        .parse()
        .map_err(|e| askama::Error::Custom(Box::new(e)))?;
    let at = DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| askama::Error::Custom("timestamp out of range".into()))?;
    Ok(format_admin_date(at))
}

fn format_admin_date(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_format_admin_date() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 15, 4, 0).unwrap();
        assert_eq!(format_admin_date(at), "Jan 5, 2024, 03:04 PM");

        let at = Utc.with_ymd_and_hms(2023, 11, 28, 9, 30, 0).unwrap();
        assert_eq!(format_admin_date(at), "Nov 28, 2023, 09:30 AM");
    }
}
