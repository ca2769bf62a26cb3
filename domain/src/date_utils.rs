use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

/// Canonical date key format used by the API and every cache
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Get the current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Get current date in YYYY-MM-DD format
pub fn today_key() -> String {
    date_key(today())
}

/// Format a date as its "YYYY-MM-DD" key
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a "YYYY-MM-DD" key (a trailing time part is ignored)
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(shared::date_portion(key), DATE_KEY_FORMAT).ok()
}

/// Check if a date key represents the given local day
pub fn is_today(key: &str, today: NaiveDate) -> bool {
    key == date_key(today)
}

/// Get the human-readable name for a month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

/// Short weekday names in grid order (weeks start on Sunday)
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Format a date key for the detail heading (e.g. "Tuesday, March 5, 2024")
pub fn format_date_for_display(key: &str) -> String {
    match parse_date_key(key) {
        Some(date) => format!(
            "{}, {} {}, {}",
            date.format("%A"),
            month_name(date.month()),
            date.day(),
            date.year()
        ),
        None => key.to_string(),
    }
}

/// Format a stored timestamp the way the page shows note creation times
/// (e.g. "3/5/2024, 8:05:00 AM"). Unparseable input is returned as-is.
pub fn format_timestamp_for_display(timestamp: &str) -> String {
    let trimmed = timestamp.trim_end_matches('Z');
    let parsed = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"));

    match parsed {
        Ok(dt) => dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Local wall-clock time used to stamp calculator history entries
pub fn current_time_label() -> String {
    Local::now().format("%-I:%M:%S %p").to_string()
}
