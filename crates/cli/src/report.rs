use std::sync::Arc;
use tripcheck::prelude::*;

pub fn render(summary: &Summary) -> String {
    [
        completeness(&summary.incomplete_trips),
        order(&summary.order_mismatches),
        stop_order(&summary.stop_order),
        durations(&summary.durations),
        intervals(&summary.intervals),
    ]
    .join("\n\n")
}

pub fn completeness(incomplete_trips: &[TripCoverage]) -> String {
    if incomplete_trips.is_empty() {
        return "All trips arrived to all stops!".to_string();
    }
    let ids: Vec<Arc<str>> = incomplete_trips
        .iter()
        .map(|coverage| coverage.trip_id.clone())
        .collect();
    format!(
        "Trips that didn't arrive to all stops:\n[{}]",
        ids.join(", ")
    )
}

pub fn order(mismatches: &[OrderMismatch]) -> String {
    if mismatches.is_empty() {
        return "All trips are identical".to_string();
    }
    mismatches
        .iter()
        .map(|mismatch| {
            format!(
                "trips {} and {} are not identical",
                mismatch.first, mismatch.second
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn stop_order(names: &[Arc<str>]) -> String {
    format!("Stop order:\n{}", names.join("\n"))
}

pub fn durations(stats: &TimingStats) -> String {
    format!(
        "Max length: {} minutes\nMin length: {} minutes\nMean length: {} minutes",
        minutes(stats.max),
        minutes(stats.min),
        minutes(stats.rounded_mean())
    )
}

pub fn intervals(summary: &IntervalSummary) -> String {
    let mut lines: Vec<String> = Vec::new();
    match &summary.stats {
        Some(stats) => lines.push(format!(
            "Max interval: {} minutes\nMin interval: {} minutes\nMean interval: {} minutes",
            minutes(stats.max),
            minutes(stats.min),
            minutes(stats.rounded_mean())
        )),
        None => lines.push("No trip has two stop visits to measure intervals".to_string()),
    }
    for failure in &summary.failures {
        lines.push(format!(
            "Trip {} left out of intervals: {}",
            failure.trip_id, failure.error
        ));
    }
    lines.join("\n")
}

/// Whole minutes keep one decimal so `20` prints as `20.0`.
fn minutes(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
fn worked_example() -> Summary {
    let csv = "trip_id,stop_id,stop_name,time\n\
               A,s1,First,10:00\n\
               A,s2,Second,10:05\n\
               A,s3,Third,10:15\n\
               B,s1,First,10:00\n\
               B,s2,Second,10:06\n\
               B,s3,Third,10:20\n";
    let log = TripLog::read(csv.as_bytes(), &reader::Config::default()).unwrap();
    summarize(&log, None).unwrap()
}

#[test]
fn render_worked_example() {
    let expected = "All trips arrived to all stops!\n\n\
                    All trips are identical\n\n\
                    Stop order:\nFirst\nSecond\nThird\n\n\
                    Max length: 20.0 minutes\nMin length: 15.0 minutes\nMean length: 17.5 minutes\n\n\
                    Max interval: 14.0 minutes\nMin interval: 5.0 minutes\nMean interval: 8.75 minutes";
    assert_eq!(render(&worked_example()), expected);
}

#[test]
fn render_incomplete_trips() {
    let coverage = TripCoverage {
        trip_id: "C".into(),
        missing: vec!["s2".into()],
        unexpected: Vec::new(),
    };
    assert_eq!(
        completeness(&[coverage]),
        "Trips that didn't arrive to all stops:\n[C]"
    );
}

#[test]
fn render_order_mismatches() {
    let mismatches = [
        OrderMismatch {
            first: "A".into(),
            second: "B".into(),
            position: 1,
        },
        OrderMismatch {
            first: "B".into(),
            second: "C".into(),
            position: 0,
        },
    ];
    assert_eq!(
        order(&mismatches),
        "trips A and B are not identical\ntrips B and C are not identical"
    );
}

#[test]
fn render_interval_failures() {
    let summary = IntervalSummary {
        stats: None,
        failures: vec![TripFailure {
            trip_id: "D".into(),
            error: analysis::Error::InsufficientData {
                required: 2,
                found: 1,
            },
        }],
    };
    assert_eq!(
        intervals(&summary),
        "No trip has two stop visits to measure intervals\n\
         Trip D left out of intervals: Need at least 2 visits but found 1"
    );
}

#[test]
fn minutes_format() {
    assert_eq!(minutes(20.0), "20.0");
    assert_eq!(minutes(8.75), "8.75");
}
