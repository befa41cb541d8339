use super::*;

#[test]
fn format_calendar_date_zero_pads() {
    assert_eq!(format_calendar_date(2024, 3, 5), "2024-03-05");
    assert_eq!(format_calendar_date(2024, 12, 31), "2024-12-31");
}

#[test]
fn is_calendar_date_accepts_iso_dates() {
    assert!(is_calendar_date("2024-03-15"));
}

#[test]
fn is_calendar_date_rejects_other_shapes() {
    assert!(!is_calendar_date(""));
    assert!(!is_calendar_date("2024-3-15"));
    assert!(!is_calendar_date("2024/03/15"));
    assert!(!is_calendar_date("2024-03-15T00:00"));
    assert!(!is_calendar_date("abcd-ef-gh"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn today_is_unknown_outside_the_browser() {
    assert_eq!(today(), None);
}
