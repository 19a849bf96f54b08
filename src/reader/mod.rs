use csv::{ReaderBuilder, StringRecord, Trim};
use std::{
    fs::{self, File},
    io::{self, Read},
    path::{Path, PathBuf},
};
use thiserror::Error;
use zip::{ZipArchive, read::ZipFile};

mod config;
pub mod models;
pub use config::*;
pub use models::*;

/// Columns every trip log must carry. Any other column is ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = ["trip_id", "stop_id", "stop_name", "time"];

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Trip log is missing column: {0}")]
    MissingColumn(String),
    #[error("Could not parse time {value:?} on line {line}")]
    UnparseableTimestamp { line: u64, value: String },
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
    #[error("Trip log contains no rows")]
    EmptyInput,
    #[error("No trip log source was configured")]
    NoSource,
}

#[derive(Debug, Default)]
pub enum StorageType {
    #[default]
    None,
    Csv(PathBuf),
    Zip(PathBuf),
}

#[derive(Debug, Default)]
pub struct TripLogReader {
    config: Config,
    storage: StorageType,
}

impl TripLogReader {
    pub fn new(config: self::Config) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn storage(&self) -> &StorageType {
        &self.storage
    }

    pub fn from_csv<P: AsRef<Path>>(mut self, path: P) -> Result<Self, self::Error> {
        let path = path.as_ref();
        fs::metadata(path)?;
        self.storage = StorageType::Csv(path.to_path_buf());
        Ok(self)
    }

    pub fn from_zip<P: AsRef<Path>>(mut self, path: P) -> Result<Self, self::Error> {
        let path = path.as_ref();
        fs::metadata(path)?;
        self.storage = StorageType::Zip(path.to_path_buf());
        Ok(self)
    }

    /// Picks the zip storage for `.zip` files and plain csv for anything else.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<Self, self::Error> {
        let is_zip = path
            .as_ref()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));
        if is_zip {
            self.from_zip(path)
        } else {
            self.from_csv(path)
        }
    }

    /// Streams every record of the configured source into `f`.
    /// The first error, from the source or from `f`, stops the stream.
    pub fn stream_rows<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, TripLogRecord)) -> Result<(), self::Error>,
    {
        match &self.storage {
            StorageType::None => Err(self::Error::NoSource),
            StorageType::Csv(path) => {
                let file = File::open(path)?;
                read_records(file, &self.config, f)
            }
            StorageType::Zip(path) => stream_from_zip(path, &self.config, f),
        }
    }
}

/// Reads trip log records from any csv source after checking its header.
pub fn read_records<R, F>(reader: R, config: &Config, mut f: F) -> Result<(), self::Error>
where
    R: Read,
    F: FnMut((usize, TripLogRecord)) -> Result<(), self::Error>,
{
    let mut reader = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .trim(Trim::All)
        .from_reader(reader);
    let headers = reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(self::Error::MissingColumn(missing.to_string()));
    }

    let mut record = StringRecord::new();
    let mut i = 0;
    while reader.read_record(&mut record)? {
        let mut value: TripLogRecord = record.deserialize(Some(&headers))?;
        value.line = record.position().map(|pos| pos.line()).unwrap_or_default();
        f((i, value))?;
        i += 1;
    }
    Ok(())
}

fn stream_from_zip<F>(zip_path: &Path, config: &Config, f: F) -> Result<(), self::Error>
where
    F: FnMut((usize, TripLogRecord)) -> Result<(), self::Error>,
{
    let zip_file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(zip_file)?;
    let file = get_file(&mut archive, &config.file_name)?;
    read_records(file, config, f)
}

fn get_file<'a>(
    archive: &'a mut ZipArchive<File>,
    name: &'a str,
) -> Result<ZipFile<'a, File>, self::Error> {
    let index = archive
        .index_for_name(name)
        .ok_or(self::Error::FileNotFound(name.to_string()))?;
    let file = archive.by_index(index)?;
    Ok(file)
}
