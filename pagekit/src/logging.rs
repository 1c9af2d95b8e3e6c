//! Log file initialization.

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
    #[error("no usable cache directory for the log file")]
    NoLogDir,
}

/// Initialize file logging at the default log path.
pub fn init(level: LevelFilter) -> Result<(), LoggingError> {
    let path = crate::paths::log_file().ok_or(LoggingError::NoLogDir)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}
