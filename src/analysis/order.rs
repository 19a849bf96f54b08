use std::sync::Arc;
use tracing::trace;

use crate::repository::TripLog;

/// Two neighbouring trips whose stop sequences differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMismatch {
    pub first: Arc<str>,
    pub second: Arc<str>,
    /// Index of the first visit where the sequences disagree. Equals the
    /// shorter length when one sequence is a prefix of the other.
    pub position: usize,
}

/// Compares each trip of `trip_list` with the one after it.
///
/// Only neighbours are compared. When every neighbouring pair matches, all
/// trips share one stop sequence. A trip with no rows compares as empty.
pub fn find_order_mismatches(table: &TripLog, trip_list: &[Arc<str>]) -> Vec<OrderMismatch> {
    trip_list
        .windows(2)
        .filter_map(|pair| {
            let [first, second] = pair else {
                return None;
            };
            let first_stops = stop_sequence(table, first);
            let second_stops = stop_sequence(table, second);
            let position = first_divergence(&first_stops, &second_stops);
            trace!("Compared trips {first} and {second}: {position:?}");
            Some(OrderMismatch {
                first: first.clone(),
                second: second.clone(),
                position: position?,
            })
        })
        .collect()
}

/// Index of the first element where `a` and `b` differ, `None` if they are equal.
pub fn first_divergence<T: PartialEq>(a: &[T], b: &[T]) -> Option<usize> {
    match a.iter().zip(b).position(|(x, y)| x != y) {
        Some(i) => Some(i),
        None if a.len() != b.len() => Some(a.len().min(b.len())),
        None => None,
    }
}

fn stop_sequence<'a>(table: &'a TripLog, trip_id: &str) -> Vec<&'a Arc<str>> {
    table
        .trip(trip_id)
        .map(|trip| trip.stop_ids().collect())
        .unwrap_or_default()
}
