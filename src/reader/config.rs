#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the trip log inside a zip archive.
    pub file_name: String,
    pub delimiter: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_name: "trip_log.csv".into(),
            delimiter: b',',
        }
    }
}
