//! Calendar-date helpers for date-keyed records.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

/// Format a date as the backend's `YYYY-MM-DD` column value.
#[must_use]
pub fn format_calendar_date(year: u32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Whether `raw` looks like a `YYYY-MM-DD` date.
#[must_use]
pub fn is_calendar_date(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}

/// Today's local date, read from the browser clock.
pub fn today() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        Some(format_calendar_date(now.get_full_year(), now.get_month() + 1, now.get_date()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
