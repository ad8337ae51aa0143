/// Utilities for date and time formatting
///
/// Provides consistent pt-BR date/time formatting across the application
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Format date to DD/MM/YYYY
/// Example: 2024-03-15 -> "15/03/2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Chart tick: "15/03"
pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

/// Format timestamp shifted by `offset_minutes` (JS `getTimezoneOffset` sign:
/// positive west of UTC) to "DD/MM/YYYY às HH:MM"
pub fn format_datetime_with_offset(ts: DateTime<Utc>, offset_minutes: i32) -> String {
    let local = ts.naive_utc() - Duration::minutes(offset_minutes as i64);
    local.format("%d/%m/%Y às %H:%M").to_string()
}

/// Timestamp in the browser's local time zone
pub fn format_datetime(ts: DateTime<Utc>) -> String {
    format_datetime_with_offset(ts, local_offset_minutes())
}

fn local_offset_minutes() -> i32 {
    js_sys::Date::new_0().get_timezone_offset() as i32
}

/// Current local calendar date as seen by the browser
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_else(|| Utc::now().date_naive())
}

/// Parse `<input type="date">` value
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Value for `<input type="date">`
pub fn input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(d(2024, 3, 15)), "15/03/2024");
        assert_eq!(format_day_month(d(2024, 3, 5)), "05/03");
    }

    #[test]
    fn test_format_datetime_offset() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime_with_offset(ts, 0), "15/03/2024 às 14:02");
        // São Paulo, UTC-3
        assert_eq!(format_datetime_with_offset(ts, 180), "15/03/2024 às 11:02");
        let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap();
        assert_eq!(
            format_datetime_with_offset(midnight, 180),
            "31/12/2023 às 22:00"
        );
    }

    #[test]
    fn test_input_date_roundtrip() {
        assert_eq!(parse_input_date("2024-02-29"), Some(d(2024, 2, 29)));
        assert_eq!(parse_input_date("2023-02-29"), None);
        assert_eq!(parse_input_date(""), None);
        assert_eq!(input_date(d(2024, 1, 9)), "2024-01-09");
    }
}
