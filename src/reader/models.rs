use serde::{Deserialize, Serialize};

/// One raw row of a trip log, before its time is parsed.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TripLogRecord {
    pub trip_id: String,
    pub stop_id: String,
    pub stop_name: String,
    pub time: String,
    /// Line of the record in its source file.
    #[serde(skip)]
    pub line: u64,
}
