//! Validates and summarizes transit trip logs.
//!
//! A log is a table of `(trip_id, stop_id, stop_name, time)` rows. The
//! [`analysis`] module answers whether every trip visited every stop, whether
//! all trips visited the stops in the same order, and how long trips and the
//! gaps between stops took.

pub mod analysis;
pub mod prelude;
pub mod reader;
pub mod repository;
pub mod shared;
