use chrono::NaiveDate;

use crate::extract::extract_dates;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_iso_date() {
    assert_eq!(extract_dates("done on 2024-03-01"), vec![date(2024, 3, 1)]);
}

#[test]
fn test_us_date() {
    assert_eq!(extract_dates("shipping 03/05/2024"), vec![date(2024, 3, 5)]);
}

#[test]
fn test_european_date() {
    assert_eq!(extract_dates("due 12-03-2024"), vec![date(2024, 3, 12)]);
}

#[test]
fn test_no_date() {
    assert!(extract_dates("finished the dashboard, starting on auth next").is_empty());
}

#[test]
fn test_multiple_dates_mixed_formats() {
    let dates = extract_dates("worked on 2024-03-01 and will continue 03/05/2024");
    assert_eq!(dates, vec![date(2024, 3, 1), date(2024, 3, 5)]);
}

#[test]
fn test_dates_in_text_order() {
    let dates = extract_dates("03/05/2024 follow-up for 2024-03-01");
    assert_eq!(dates, vec![date(2024, 3, 5), date(2024, 3, 1)]);
}

#[test]
fn test_duplicate_date_collapses() {
    let dates = extract_dates("2024-03-01 and again 2024-03-01");
    assert_eq!(dates, vec![date(2024, 3, 1)]);
}

#[test]
fn test_iso_span_not_reclaimed_by_european_pattern() {
    // "2024-03-01" must yield exactly one date, not a second bogus
    // day-month-year reading of its tail
    let dates = extract_dates("2024-03-01");
    assert_eq!(dates, vec![date(2024, 3, 1)]);
}

#[test]
fn test_invalid_calendar_date_skipped() {
    assert!(extract_dates("marker 2024-13-40 is not a date").is_empty());
}

#[test]
fn test_invalid_us_month_skipped() {
    assert!(extract_dates("ref 13/25/2024").is_empty());
}

#[test]
fn test_ambiguous_day_month_uses_european_order() {
    // 03-04-2024 could be March 4 or April 3; dash-separated two-digit
    // prefixes parse day-first by policy
    assert_eq!(extract_dates("meeting 03-04-2024"), vec![date(2024, 4, 3)]);
}

#[test]
fn test_date_embedded_in_sentence() {
    let dates = extract_dates("Yesterday (2024-03-01) I fixed the login flow.");
    assert_eq!(dates, vec![date(2024, 3, 1)]);
}
