pub use crate::analysis::{
    self, IntervalSummary, OrderMismatch, StopSet, Summary, TimingStats, TripCoverage,
    TripFailure, TripList, TripTiming, aggregate_durations, aggregate_intervals, build_indexes,
    find_incomplete_trips, find_order_mismatches, ordered_stop_names, stop_coverage, summarize,
};
pub use crate::reader::{self, TripLogReader};
pub use crate::repository::{StopVisit, TripGroup, TripLog};
