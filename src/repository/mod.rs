use std::cmp::Ordering;

mod models;
mod source;
pub use models::*;
use rayon::prelude::*;

/// The loaded trip log, sorted by trip and then by time.
///
/// Every trip's visits are contiguous and chronological, so a trip can be
/// viewed as a plain slice without copying or caching anything.
#[derive(Debug, Clone, Default)]
pub struct TripLog {
    visits: Box<[StopVisit]>,
}

impl TripLog {
    pub fn new() -> Self {
        Default::default()
    }

    /// Builds a log from visits in any order. The sort is stable, so visits
    /// sharing a trip and a time keep their input order.
    pub fn from_visits(mut visits: Vec<StopVisit>) -> Self {
        visits.par_sort_by(|a, b| {
            compare_trip_ids(&a.trip_id, &b.trip_id).then_with(|| a.time.cmp(&b.time))
        });
        Self {
            visits: visits.into(),
        }
    }

    pub fn visits(&self) -> &[StopVisit] {
        &self.visits
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Trips in order of first appearance.
    pub fn trips(&self) -> impl Iterator<Item = TripGroup<'_>> {
        self.visits
            .chunk_by(|a, b| a.trip_id == b.trip_id)
            .filter_map(TripGroup::from_chunk)
    }

    pub fn trip(&self, trip_id: &str) -> Option<TripGroup<'_>> {
        self.trips().find(|trip| trip.trip_id.as_ref() == trip_id)
    }
}

/// Orders trip ids numerically when both are integers, otherwise lexically.
/// Integer ids sort before every other id.
pub fn compare_trip_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(a_num), Ok(b_num)) => a_num.cmp(&b_num).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
