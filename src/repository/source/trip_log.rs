use crate::{
    reader::{self, TripLogReader, TripLogRecord},
    repository::{StopVisit, TripLog},
    shared::parse_timestamp,
};
use std::{collections::HashSet, io::Read, sync::Arc, time::Instant};
use tracing::debug;

type RecordSink<'a> = dyn FnMut((usize, TripLogRecord)) -> Result<(), reader::Error> + 'a;

impl TripLog {
    /// Reads every row of the configured source into a sorted log.
    /// Fails on the first unreadable row or timestamp, and on a log with no rows.
    pub fn load(source: &TripLogReader) -> Result<Self, reader::Error> {
        debug!("Loading trip log from {:?}...", source.storage());
        Self::build(|sink| source.stream_rows(sink))
    }

    /// Same as [`TripLog::load`] but over an in-memory csv source.
    pub fn read<R: Read>(input: R, config: &reader::Config) -> Result<Self, reader::Error> {
        debug!("Reading trip log...");
        Self::build(|sink| reader::read_records(input, config, sink))
    }

    fn build<S>(stream: S) -> Result<Self, reader::Error>
    where
        S: FnOnce(&mut RecordSink<'_>) -> Result<(), reader::Error>,
    {
        let now = Instant::now();
        let mut owner_lookup: HashSet<Arc<str>> = HashSet::new();
        let mut visits: Vec<StopVisit> = Vec::new();
        let mut sink = |(_, record): (usize, TripLogRecord)| -> Result<(), reader::Error> {
            let time = parse_timestamp(&record.time).ok_or_else(|| {
                reader::Error::UnparseableTimestamp {
                    line: record.line,
                    value: record.time.clone(),
                }
            })?;
            visits.push(StopVisit {
                trip_id: intern(&mut owner_lookup, record.trip_id),
                stop_id: intern(&mut owner_lookup, record.stop_id),
                stop_name: intern(&mut owner_lookup, record.stop_name),
                time,
            });
            Ok(())
        };
        stream(&mut sink)?;
        debug!("Reading {} rows took {:?}", visits.len(), now.elapsed());

        if visits.is_empty() {
            return Err(reader::Error::EmptyInput);
        }

        let now = Instant::now();
        let log = Self::from_visits(visits);
        debug!("Sorting trip log took {:?}", now.elapsed());
        Ok(log)
    }
}

fn intern(owner_lookup: &mut HashSet<Arc<str>>, value: String) -> Arc<str> {
    if let Some(id) = owner_lookup.get(value.as_str()) {
        id.clone()
    } else {
        let id: Arc<str> = value.into();
        owner_lookup.insert(id.clone());
        id
    }
}
