use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Parses a trip log timestamp.
///
/// Full date times are accepted with or without an offset. Bare clock times
/// are anchored to 1970-01-01 so that every row of a log shares one date.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Some(time.naive_utc());
    }
    if let Some(time) = DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Some(time);
    }
    let time = TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())?;
    Some(NaiveDate::default().and_time(time))
}

/// Elapsed minutes from `from` to `to`, negative if `to` is earlier.
pub fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    let delta = to - from;
    let nanos = delta.subsec_nanos() as f64 / 1_000_000_000.0;
    (delta.num_seconds() as f64 + nanos) / SECONDS_PER_MINUTE
}

/// Rounds to two decimals, the precision used when printing means.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[test]
fn parse_date_time() {
    let time = parse_timestamp("2024-03-01 10:05:00").unwrap();
    assert_eq!(time.to_string(), "2024-03-01 10:05:00");
}

#[test]
fn parse_iso_date_time() {
    let time = parse_timestamp("2024-03-01T10:05:30").unwrap();
    assert_eq!(time.to_string(), "2024-03-01 10:05:30");
}

#[test]
fn parse_date_time_with_fraction() {
    let time = parse_timestamp("2024-03-01 10:05:30.500").unwrap();
    assert_eq!(time.to_string(), "2024-03-01 10:05:30.500");
}

#[test]
fn parse_date_time_without_seconds() {
    let time = parse_timestamp("2024-03-01 10:05").unwrap();
    assert_eq!(time.to_string(), "2024-03-01 10:05:00");
}

#[test]
fn parse_rfc3339() {
    let time = parse_timestamp("2024-03-01T10:05:00+02:00").unwrap();
    assert_eq!(time.to_string(), "2024-03-01 08:05:00");
}

#[test]
fn parse_bare_time() {
    let time = parse_timestamp("10:05").unwrap();
    assert_eq!(time.to_string(), "1970-01-01 10:05:00");
}

#[test]
fn parse_trims_whitespace() {
    assert!(parse_timestamp(" 10:05:00 ").is_some());
}

#[test]
fn invalid_timestamp_1() {
    assert!(parse_timestamp("10:0a").is_none());
}

#[test]
fn invalid_timestamp_2() {
    assert!(parse_timestamp("yesterday").is_none());
}

#[test]
fn invalid_timestamp_3() {
    assert!(parse_timestamp("").is_none());
}

#[test]
fn minutes_between_whole_minutes() {
    let from = parse_timestamp("10:00").unwrap();
    let to = parse_timestamp("10:15").unwrap();
    assert_eq!(minutes_between(from, to), 15.0);
}

#[test]
fn minutes_between_seconds() {
    let from = parse_timestamp("10:00:00").unwrap();
    let to = parse_timestamp("10:00:30").unwrap();
    assert_eq!(minutes_between(from, to), 0.5);
}

#[test]
fn minutes_between_across_midnight() {
    let from = parse_timestamp("2024-03-01 23:50:00").unwrap();
    let to = parse_timestamp("2024-03-02 00:10:00").unwrap();
    assert_eq!(minutes_between(from, to), 20.0);
}

#[test]
fn round_mean() {
    assert_eq!(round_to_hundredths(17.5), 17.5);
    assert_eq!(round_to_hundredths(8.756), 8.76);
    assert_eq!(round_to_hundredths(10.0 / 3.0), 3.33);
}
