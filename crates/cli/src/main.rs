mod config;
mod report;

use std::time::Instant;
use tracing::{debug, error, info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;
use tripcheck::prelude::*;

fn main() {
    init_logger();

    let Some(path) = config::data_path(
        std::env::args().skip(1),
        std::env::var(config::DATA_PATH_ENV).ok(),
    ) else {
        error!(
            "Missing trip log, pass its path or set {}",
            config::DATA_PATH_ENV
        );
        std::process::exit(1);
    };

    info!("Loading trip log {}...", path.display());
    let now = Instant::now();
    let log = match TripLogReader::new(reader::Config::default())
        .from_path(&path)
        .and_then(|source| TripLog::load(&source))
    {
        Ok(log) => log,
        Err(err) => {
            error!("Failed to load trip log: {err}");
            std::process::exit(1);
        }
    };
    info!("Loading {} rows took {:?}", log.len(), now.elapsed());

    let summary = match summarize(&log, None) {
        Ok(summary) => summary,
        Err(err) => {
            error!("Failed to analyze trip log: {err}");
            std::process::exit(1);
        }
    };
    for coverage in &summary.incomplete_trips {
        debug!(
            "Trip {} is missing {:?} and visited unknown {:?}",
            coverage.trip_id, coverage.missing, coverage.unexpected
        );
    }

    println!("{}", report::render(&summary));
}

fn init_logger() {
    let default_level = LevelFilter::INFO;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(default_level.to_string())
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
