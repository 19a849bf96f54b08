mod common;

use common::{fixture, log, timestamp};
use std::{fs::File, io::Write, path::PathBuf, sync::Arc};
use tripcheck::{
    prelude::*,
    reader::{Error, StorageType},
};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

fn write_zip(name: &str, member: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tripcheck-{}-{name}.zip", std::process::id()));
    let file = File::create(&path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    zip.start_file(member, options).unwrap();
    zip.write_all(contents.as_bytes()).unwrap();
    zip.finish().unwrap();
    path
}

#[test]
fn load_from_csv_test() {
    let reader = TripLogReader::new(reader::Config::default())
        .from_csv(fixture("trip_log.csv"))
        .unwrap();
    let log = TripLog::load(&reader).unwrap();

    assert_eq!(log.len(), 6);
    let trips: Vec<&str> = log.trips().map(|trip| trip.trip_id.as_ref()).collect();
    assert_eq!(trips, vec!["9", "10"]);

    let first = log.trip("9").unwrap();
    let stops: Vec<&str> = first.stop_ids().map(|id| id.as_ref()).collect();
    assert_eq!(stops, vec!["s1", "s2", "s3"]);
    assert_eq!(first.visits[0].stop_name.as_ref(), "Central Station");
    assert_eq!(first.visits[0].time, timestamp("2024-03-01 10:00:00"));
}

#[test]
fn rows_sorted_by_time_within_trip() {
    let log = log("trip_id,stop_id,stop_name,time\n\
                   1,s3,Harbour,10:15\n\
                   1,s1,Central Station,10:00\n\
                   1,s2,Market Square,10:05\n");
    let stops: Vec<&str> = log
        .trip("1")
        .unwrap()
        .stop_ids()
        .map(|id| id.as_ref())
        .collect();
    assert_eq!(stops, vec!["s1", "s2", "s3"]);
}

#[test]
fn equal_times_keep_file_order() {
    let log = log("trip_id,stop_id,stop_name,time\n\
                   1,s2,Market Square,10:00\n\
                   1,s1,Central Station,10:00\n");
    let stops: Vec<&str> = log.visits().iter().map(|v| v.stop_id.as_ref()).collect();
    assert_eq!(stops, vec!["s2", "s1"]);
}

#[test]
fn trip_ids_are_interned() {
    let reader = TripLogReader::new(reader::Config::default())
        .from_csv(fixture("trip_log.csv"))
        .unwrap();
    let log = TripLog::load(&reader).unwrap();
    let trip = log.trip("10").unwrap();
    assert!(Arc::ptr_eq(&trip.visits[0].trip_id, &trip.visits[1].trip_id));
}

#[test]
fn missing_column_test() {
    let reader = TripLogReader::new(reader::Config::default())
        .from_csv(fixture("missing_column.csv"))
        .unwrap();
    match TripLog::load(&reader) {
        Err(Error::MissingColumn(column)) => assert_eq!(column, "stop_name"),
        other => panic!("expected missing column, got {other:?}"),
    }
}

#[test]
fn unparseable_timestamp_test() {
    let reader = TripLogReader::new(reader::Config::default())
        .from_csv(fixture("bad_time.csv"))
        .unwrap();
    match TripLog::load(&reader) {
        Err(Error::UnparseableTimestamp { line, value }) => {
            assert_eq!(line, 3);
            assert_eq!(value, "ten past");
        }
        other => panic!("expected unparseable timestamp, got {other:?}"),
    }
}

#[test]
fn empty_input_test() {
    let reader = TripLogReader::new(reader::Config::default())
        .from_csv(fixture("empty.csv"))
        .unwrap();
    assert!(matches!(TripLog::load(&reader), Err(Error::EmptyInput)));
}

#[test]
fn missing_file_test() {
    let result = TripLogReader::new(reader::Config::default()).from_csv(fixture("nope.csv"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn no_source_test() {
    let reader = TripLogReader::default();
    assert!(matches!(TripLog::load(&reader), Err(Error::NoSource)));
}

#[test]
fn semicolon_delimiter_test() {
    let config = reader::Config {
        delimiter: b';',
        ..Default::default()
    };
    let csv = "trip_id;stop_id;stop_name;time\n1;s1;Central Station;10:00\n";
    let log = TripLog::read(csv.as_bytes(), &config).unwrap();
    assert_eq!(log.visits()[0].stop_name.as_ref(), "Central Station");
}

#[test]
fn load_from_zip_test() {
    let csv = std::fs::read_to_string(fixture("trip_log.csv")).unwrap();
    let path = write_zip("load", "trip_log.csv", &csv);
    let reader = TripLogReader::new(reader::Config::default())
        .from_path(&path)
        .unwrap();
    assert!(matches!(reader.storage(), StorageType::Zip(_)));

    let log = TripLog::load(&reader).unwrap();
    assert_eq!(log.len(), 6);
    let _ = std::fs::remove_file(path);
}

#[test]
fn zip_member_not_found_test() {
    let path = write_zip("member", "other.csv", "trip_id,stop_id,stop_name,time\n");
    let reader = TripLogReader::new(reader::Config::default())
        .from_zip(&path)
        .unwrap();
    match TripLog::load(&reader) {
        Err(Error::FileNotFound(name)) => assert_eq!(name, "trip_log.csv"),
        other => panic!("expected file not found, got {other:?}"),
    }
    let _ = std::fs::remove_file(path);
}

#[test]
fn from_path_picks_csv_test() {
    let reader = TripLogReader::new(reader::Config::default())
        .from_path(fixture("trip_log.csv"))
        .unwrap();
    assert!(matches!(reader.storage(), StorageType::Csv(_)));
}
