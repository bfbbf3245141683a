// SPDX-License-Identifier: MPL-2.0
use chrono::{NaiveDate, TimeZone, Utc};
use frontkit::dates::{
    self, add_time, days_in_month, diff_time, format_date, is_between, is_leap_year, is_same_day,
    parse_date, patterns, subtract_time, DateError, TimeUnit,
};

#[test]
fn leap_years_follow_gregorian_rules() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));
}

#[test]
fn february_length_depends_on_leap_year() {
    assert_eq!(days_in_month(2024, 2), Ok(29));
    assert_eq!(days_in_month(2023, 2), Ok(28));
    assert_eq!(days_in_month(2025, 12), Ok(31));
    assert!(days_in_month(2025, 13).is_err());
}

#[test]
fn add_and_diff_days() {
    let start = "2025-01-15";
    let later = add_time(start, 3, TimeUnit::Days).unwrap();
    assert_eq!(dates::to_iso_date(later).unwrap(), "2025-01-18");
    assert_eq!(diff_time(later, start, TimeUnit::Days), Ok(3));
    assert_eq!(diff_time(start, later, TimeUnit::Days), Ok(-3));
}

#[test]
fn subtract_is_add_of_negated_amount() {
    let date = "2025-03-31T08:00:00Z";
    for unit in TimeUnit::ALL {
        assert_eq!(
            subtract_time(date, 2, unit).unwrap(),
            add_time(date, -2, unit).unwrap(),
            "{unit}"
        );
    }
}

#[test]
fn month_addition_clamps_to_month_end() {
    let date = add_time("2024-01-31", 1, TimeUnit::Months).unwrap();
    assert_eq!(dates::to_iso_date(date).unwrap(), "2024-02-29");
    let date = add_time("2024-02-29", 1, TimeUnit::Years).unwrap();
    assert_eq!(dates::to_iso_date(date).unwrap(), "2025-02-28");
}

#[test]
fn parse_then_format_keeps_calendar_date() {
    let parsed = parse_date("2025-01-15").unwrap();
    assert_eq!(format_date(parsed, patterns::ISO_DATE).unwrap(), "2025-01-15");
    assert_eq!(
        dates::to_iso_string("2025-01-15T10:30:00Z").unwrap(),
        "2025-01-15T10:30:00.000Z"
    );
}

#[test]
fn all_input_shapes_describe_the_same_instant() {
    let expected = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
    let naive = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

    assert_eq!(parse_date("2025-01-15").unwrap(), expected);
    assert_eq!(parse_date("2025-01-15T00:00:00Z").unwrap(), expected);
    assert_eq!(parse_date("2025-01-15T01:00:00+01:00").unwrap(), expected);
    assert_eq!(parse_date(expected.timestamp_millis()).unwrap(), expected);
    assert_eq!(parse_date(naive).unwrap(), expected);
    assert_eq!(parse_date(expected).unwrap(), expected);
}

#[test]
fn unparseable_input_is_an_error() {
    assert!(matches!(
        parse_date("not a date"),
        Err(DateError::InvalidDate { .. })
    ));
    assert!(add_time("2025-02-30", 1, TimeUnit::Days).is_err());
    assert!(is_same_day("", "2025-01-01").is_err());
}

#[test]
fn range_checks_are_inclusive() {
    let (start, end) = ("2025-01-01", "2025-01-31");
    assert_eq!(is_between("2025-01-01", start, end), Ok(true));
    assert_eq!(is_between("2025-01-31", start, end), Ok(true));
    assert_eq!(is_between("2025-02-01", start, end), Ok(false));
    assert_eq!(is_between("2025-01-15", end, start), Ok(false));
}

#[test]
fn inputs_are_not_mutated() {
    let original = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
    let copy = original;
    let _ = add_time(original, 5, TimeUnit::Years).unwrap();
    let _ = dates::start_of_week(original).unwrap();
    assert_eq!(original, copy);
}
