#![allow(dead_code)]

use chrono::NaiveDateTime;
use tripcheck::{prelude::*, shared::parse_timestamp};

pub fn fixture(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

pub fn log(csv: &str) -> TripLog {
    TripLog::read(csv.as_bytes(), &reader::Config::default()).unwrap()
}

/// Builds a log from `(trip, stop, time)` rows, naming each stop after its id.
pub fn log_of(rows: &[(&str, &str, &str)]) -> TripLog {
    let visits = rows
        .iter()
        .map(|(trip, stop, time)| {
            StopVisit::new(*trip, *stop, format!("Stop {stop}"), timestamp(time))
        })
        .collect();
    TripLog::from_visits(visits)
}

pub fn timestamp(value: &str) -> NaiveDateTime {
    parse_timestamp(value).unwrap()
}

pub fn timestamps(values: &[&str]) -> Vec<NaiveDateTime> {
    values.iter().map(|value| timestamp(value)).collect()
}

/// Trips A and B visit s1, s2, s3 in the same order.
pub fn worked_example() -> TripLog {
    log_of(&[
        ("A", "s1", "10:00"),
        ("A", "s2", "10:05"),
        ("A", "s3", "10:15"),
        ("B", "s1", "10:00"),
        ("B", "s2", "10:06"),
        ("B", "s3", "10:20"),
    ])
}
