use chrono::NaiveDateTime;
use std::sync::Arc;

/// A single recorded arrival of a trip at a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopVisit {
    /// The vehicle run this visit belongs to.
    pub trip_id: Arc<str>,
    /// Unique external identifier of the stop.
    pub stop_id: Arc<str>,
    /// Human-readable stop name (e.g., "Main St & 4th Ave").
    pub stop_name: Arc<str>,
    pub time: NaiveDateTime,
}

impl StopVisit {
    pub fn new(
        trip_id: impl Into<Arc<str>>,
        stop_id: impl Into<Arc<str>>,
        stop_name: impl Into<Arc<str>>,
        time: NaiveDateTime,
    ) -> Self {
        Self {
            trip_id: trip_id.into(),
            stop_id: stop_id.into(),
            stop_name: stop_name.into(),
            time,
        }
    }
}

/// Borrowed view over the contiguous visits of one trip, in chronological order.
#[derive(Debug, Clone, Copy)]
pub struct TripGroup<'a> {
    pub trip_id: &'a Arc<str>,
    pub visits: &'a [StopVisit],
}

impl<'a> TripGroup<'a> {
    pub(crate) fn from_chunk(visits: &'a [StopVisit]) -> Option<Self> {
        let first = visits.first()?;
        Some(Self {
            trip_id: &first.trip_id,
            visits,
        })
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    pub fn stop_ids(self) -> impl Iterator<Item = &'a Arc<str>> {
        self.visits.iter().map(|visit| &visit.stop_id)
    }

    pub fn stop_names(self) -> impl Iterator<Item = &'a Arc<str>> {
        self.visits.iter().map(|visit| &visit.stop_name)
    }

    pub fn times(&self) -> Vec<NaiveDateTime> {
        self.visits.iter().map(|visit| visit.time).collect()
    }
}
