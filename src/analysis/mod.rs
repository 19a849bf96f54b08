use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

mod completeness;
mod index;
mod order;
mod stop_order;
pub mod timing;

pub use completeness::*;
pub use index::*;
pub use order::*;
pub use stop_order::*;
pub use timing::*;

use crate::repository::TripLog;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Trip log contains no rows")]
    EmptyInput,
    #[error("Need at least {required} visits but found {found}")]
    InsufficientData { required: usize, found: usize },
}

/// Everything the checks found in one pass over a trip log.
#[derive(Debug, Clone)]
pub struct Summary {
    pub stop_count: usize,
    pub trips: TripList,
    pub incomplete_trips: Vec<TripCoverage>,
    pub order_mismatches: Vec<OrderMismatch>,
    pub reference_trip: Arc<str>,
    pub stop_order: Vec<Arc<str>>,
    pub durations: TimingStats,
    pub intervals: IntervalSummary,
}

/// Runs every check over `table`.
/// The stop order is taken from `reference_trip`, or from the first trip when `None`.
pub fn summarize(table: &TripLog, reference_trip: Option<&str>) -> Result<Summary, self::Error> {
    let (stop_set, trips) = build_indexes(table)?;
    debug!("Indexed {} stops over {} trips", stop_set.len(), trips.len());

    let reference_trip: Arc<str> = match reference_trip {
        Some(id) => id.into(),
        None => trips.first().cloned().ok_or(self::Error::EmptyInput)?,
    };

    let incomplete_trips = stop_coverage(table, &stop_set);
    let order_mismatches = find_order_mismatches(table, &trips);
    let stop_order = ordered_stop_names(table, &reference_trip);

    let timings = timing::trip_timings(table);
    let durations = timing::duration_stats(&timings).ok_or(self::Error::EmptyInput)?;
    let intervals = timing::interval_summary(&timings);

    Ok(Summary {
        stop_count: stop_set.len(),
        trips,
        incomplete_trips,
        order_mismatches,
        reference_trip,
        stop_order,
        durations,
        intervals,
    })
}
