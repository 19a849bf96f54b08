//! Trip durations and the gaps between consecutive stop visits, in minutes.

use chrono::NaiveDateTime;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::warn;

use crate::{
    analysis,
    repository::{TripGroup, TripLog},
    shared::{minutes_between, round_to_hundredths},
};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimingStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl TimingStats {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let (first, rest) = values.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), value| {
                (min.min(*value), max.max(*value))
            });
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Some(Self { min, max, mean })
    }

    /// The mean as printed, rounded to two decimals.
    pub fn rounded_mean(&self) -> f64 {
        round_to_hundredths(self.mean)
    }
}

/// The values both batch aggregates are reduced from.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTiming {
    pub trip_id: Arc<str>,
    pub duration: f64,
    pub intervals: Result<TimingStats, analysis::Error>,
}

/// A trip left out of a batch statistic and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripFailure {
    pub trip_id: Arc<str>,
    pub error: analysis::Error,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntervalSummary {
    /// `None` when no trip had two visits.
    pub stats: Option<TimingStats>,
    pub failures: Vec<TripFailure>,
}

/// Minutes between the earliest and latest time. A single time gives 0.
pub fn trip_duration(times: &[NaiveDateTime]) -> Result<f64, analysis::Error> {
    let first = times.first().ok_or(analysis::Error::EmptyInput)?;
    let (earliest, latest) = times
        .iter()
        .fold((*first, *first), |(earliest, latest), time| {
            (earliest.min(*time), latest.max(*time))
        });
    Ok(minutes_between(earliest, latest))
}

/// Minutes between each time and the next one.
pub fn intervals(times: &[NaiveDateTime]) -> Vec<f64> {
    times
        .iter()
        .zip(times.iter().skip(1))
        .map(|(from, to)| minutes_between(*from, *to))
        .collect()
}

pub fn interval_stats(times: &[NaiveDateTime]) -> Result<TimingStats, analysis::Error> {
    TimingStats::from_values(&intervals(times)).ok_or(analysis::Error::InsufficientData {
        required: 2,
        found: times.len(),
    })
}

pub fn min_interval(times: &[NaiveDateTime]) -> Result<f64, analysis::Error> {
    interval_stats(times).map(|stats| stats.min)
}

pub fn max_interval(times: &[NaiveDateTime]) -> Result<f64, analysis::Error> {
    interval_stats(times).map(|stats| stats.max)
}

pub fn mean_interval(times: &[NaiveDateTime]) -> Result<f64, analysis::Error> {
    interval_stats(times).map(|stats| stats.mean)
}

/// Per trip duration and interval statistics, in trip order.
pub fn trip_timings(table: &TripLog) -> Vec<TripTiming> {
    let trips: Vec<TripGroup<'_>> = table.trips().collect();
    trips
        .par_iter()
        .filter_map(|trip| {
            let times = trip.times();
            let duration = trip_duration(&times).ok()?;
            Some(TripTiming {
                trip_id: trip.trip_id.clone(),
                duration,
                intervals: interval_stats(&times),
            })
        })
        .collect()
}

/// Longest, shortest and mean trip duration.
pub fn aggregate_durations(table: &TripLog) -> Result<TimingStats, analysis::Error> {
    duration_stats(&trip_timings(table)).ok_or(analysis::Error::EmptyInput)
}

/// Longest of the per trip maxima, shortest of the per trip minima and the
/// mean of the per trip means.
///
/// The mean is a mean of means: a trip with many visits weighs as much as a
/// trip with few. Trips with fewer than two visits are reported in
/// [`IntervalSummary::failures`] instead of failing the batch.
pub fn aggregate_intervals(table: &TripLog) -> Result<IntervalSummary, analysis::Error> {
    if table.is_empty() {
        return Err(analysis::Error::EmptyInput);
    }
    Ok(interval_summary(&trip_timings(table)))
}

pub(crate) fn duration_stats(timings: &[TripTiming]) -> Option<TimingStats> {
    let durations: Vec<f64> = timings.iter().map(|timing| timing.duration).collect();
    TimingStats::from_values(&durations)
}

pub(crate) fn interval_summary(timings: &[TripTiming]) -> IntervalSummary {
    let mut per_trip: Vec<TimingStats> = Vec::with_capacity(timings.len());
    let mut failures: Vec<TripFailure> = Vec::new();
    for timing in timings {
        match &timing.intervals {
            Ok(stats) => per_trip.push(*stats),
            Err(error) => {
                warn!(
                    "Trip {} left out of interval statistics: {error}",
                    timing.trip_id
                );
                failures.push(TripFailure {
                    trip_id: timing.trip_id.clone(),
                    error: error.clone(),
                });
            }
        }
    }
    IntervalSummary {
        stats: merge(&per_trip),
        failures,
    }
}

fn merge(per_trip: &[TimingStats]) -> Option<TimingStats> {
    let (first, rest) = per_trip.split_first()?;
    let (min, max) = rest.iter().fold((first.min, first.max), |(min, max), stats| {
        (min.min(stats.min), max.max(stats.max))
    });
    let mean = per_trip.iter().map(|stats| stats.mean).sum::<f64>() / per_trip.len() as f64;
    Some(TimingStats { min, max, mean })
}
