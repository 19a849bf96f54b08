use std::sync::Arc;

use crate::repository::TripLog;

/// Stop names of `reference_trip_id` in visiting order, empty if the trip is unknown.
pub fn ordered_stop_names(table: &TripLog, reference_trip_id: &str) -> Vec<Arc<str>> {
    table
        .trip(reference_trip_id)
        .map(|trip| trip.stop_names().cloned().collect())
        .unwrap_or_default()
}
