//! Log setup for the command-line tool.
//!
//! Every run writes to a fresh `<logdir>/<start time>.log`. `--verbose`
//! mirrors the same events to stderr. The level comes from `RUST_LOG` and
//! defaults to `info`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::error::{ConvertError, Result};

#[derive(Debug, Clone)]
pub struct LogOptions {
    pub logdir: PathBuf,
    pub verbose: bool,
    pub json: bool,
}

/// Path of the log file for a run started now.
pub fn log_file_path(logdir: &Path) -> PathBuf {
    let started = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S");
    logdir.join(format!("{started}.log"))
}

/// Install the global subscriber. Returns the log file path.
pub fn init(options: &LogOptions) -> Result<PathBuf> {
    fs::create_dir_all(&options.logdir)?;
    let path = log_file_path(&options.logdir);
    let file = Mutex::new(File::create(&path)?);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = if options.json {
        fmt::layer().json().with_writer(file).boxed()
    } else {
        fmt::layer().with_ansi(false).with_writer(file).boxed()
    };
    let stderr_layer = options
        .verbose
        .then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| ConvertError::Logging(e.to_string()))?;

    Ok(path)
}
