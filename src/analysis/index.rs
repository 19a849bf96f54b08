use std::{collections::HashSet, sync::Arc};

use crate::{analysis, repository::TripLog};

/// Every distinct stop id of a log. Only used for membership tests.
pub type StopSet = HashSet<Arc<str>>;
/// Distinct trip ids in order of first appearance in the sorted log.
pub type TripList = Vec<Arc<str>>;

pub fn build_indexes(table: &TripLog) -> Result<(StopSet, TripList), analysis::Error> {
    if table.is_empty() {
        return Err(analysis::Error::EmptyInput);
    }
    let stop_set: StopSet = table
        .visits()
        .iter()
        .map(|visit| visit.stop_id.clone())
        .collect();
    let trip_list: TripList = table.trips().map(|trip| trip.trip_id.clone()).collect();
    Ok((stop_set, trip_list))
}
