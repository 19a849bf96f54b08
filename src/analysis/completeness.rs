use rayon::prelude::*;
use std::{collections::HashSet, sync::Arc};

use crate::{
    analysis::StopSet,
    repository::{TripGroup, TripLog},
};

/// How the stops of one trip differ from the full stop set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripCoverage {
    pub trip_id: Arc<str>,
    /// Stops in the stop set the trip never visited, sorted.
    pub missing: Vec<Arc<str>>,
    /// Stops the trip visited that are not in the stop set, in visit order.
    pub unexpected: Vec<Arc<str>>,
}

impl TripCoverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// Ids of every trip whose visited stops are not exactly `stop_set`.
///
/// Repeated visits to one stop count once, so a trip that skips nothing
/// but visits a stop twice still passes.
pub fn find_incomplete_trips(table: &TripLog, stop_set: &StopSet) -> Vec<Arc<str>> {
    stop_coverage(table, stop_set)
        .into_iter()
        .map(|coverage| coverage.trip_id)
        .collect()
}

/// Coverage details for every incomplete trip, in trip order.
pub fn stop_coverage(table: &TripLog, stop_set: &StopSet) -> Vec<TripCoverage> {
    let trips: Vec<TripGroup<'_>> = table.trips().collect();
    trips
        .par_iter()
        .map(|trip| coverage(*trip, stop_set))
        .filter(|coverage| !coverage.is_complete())
        .collect()
}

fn coverage(trip: TripGroup<'_>, stop_set: &StopSet) -> TripCoverage {
    let visited: HashSet<&Arc<str>> = trip.stop_ids().collect();
    let mut missing: Vec<Arc<str>> = stop_set
        .iter()
        .filter(|id| !visited.contains(id))
        .cloned()
        .collect();
    missing.sort();

    let mut seen: HashSet<&Arc<str>> = HashSet::new();
    let unexpected = trip
        .stop_ids()
        .filter(|id| !stop_set.contains(*id) && seen.insert(*id))
        .cloned()
        .collect();

    TripCoverage {
        trip_id: trip.trip_id.clone(),
        missing,
        unexpected,
    }
}
