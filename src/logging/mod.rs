//! ## Sets up logging by reading configuration from environment variables.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: when using file mode, the directory of the log file (default "./logs")
//! - LOG_MAX_SIZE: size in bytes after which a new file is started (default 1GB)

use chrono::Utc;
use log::info;
use simplelog::{Config, LevelFilter, SimpleLogger, WriteLogger};
use std::{
    env,
    fs::{create_dir_all, metadata, File, OpenOptions},
    path::Path,
    str::FromStr,
};
use thiserror::Error;

const LOG_FILE_NAME: &str = "resolver.log";
const DEFAULT_MAX_SIZE: u64 = 1_073_741_824;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("LOG_MAX_SIZE must be a valid u64 if set, got '{0}'")]
    InvalidMaxSize(String),
    #[error("Log file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogMode {
    Stdout,
    File,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub mode: LogMode,
    pub level: LevelFilter,
    pub log_dir: String,
    pub max_size: u64,
}

impl LoggingConfig {
    pub fn from_env() -> Result<Self, LoggingError> {
        let mode = env::var("LOG_MODE")
            .ok()
            .and_then(|v| LogMode::from_str(&v).ok())
            .unwrap_or(LogMode::Stdout);

        let level = env::var("LOG_LEVEL")
            .ok()
            .and_then(|v| LevelFilter::from_str(&v).ok())
            .unwrap_or(LevelFilter::Info);

        // Use logs/ directly in container path, otherwise LOG_DATA_DIR or ./logs
        let log_dir = if env::var("IN_DOCKER")
            .map(|val| val == "true")
            .unwrap_or(false)
        {
            "logs/".to_string()
        } else {
            env::var("LOG_DATA_DIR").unwrap_or_else(|_| "./logs".to_string())
        };

        let max_size = match env::var("LOG_MAX_SIZE") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|_| LoggingError::InvalidMaxSize(value))?,
            Err(_) => DEFAULT_MAX_SIZE,
        };

        Ok(Self {
            mode,
            level,
            log_dir: format!("{}/", log_dir.trim_end_matches('/')),
            max_size,
        })
    }

    pub fn base_file_path(&self) -> String {
        format!("{}{}", self.log_dir, LOG_FILE_NAME)
    }

    /// File to write to on `date_str`, after time and size based rolling.
    pub fn log_file_path(&self, date_str: &str) -> String {
        let base_file_path = self.base_file_path();
        let time_based_path = time_based_rolling(&base_file_path, date_str, 1);
        space_based_rolling(&time_based_path, &base_file_path, date_str, self.max_size)
    }
}

/// Computes the path of the rolled log file given the base file path and the date string.
pub fn compute_rolled_file_path(base_file_path: &str, date_str: &str, index: u32) -> String {
    let trimmed = base_file_path
        .strip_suffix(".log")
        .unwrap_or(base_file_path);
    format!("{}-{}.{}.log", trimmed, date_str, index)
}

/// Generates a time-based log file name.
pub fn time_based_rolling(base_file_path: &str, date_str: &str, index: u32) -> String {
    compute_rolled_file_path(base_file_path, date_str, index)
}

/// Returns `file_path`, or the next free sequence-numbered file if it already
/// exceeds `max_size` bytes.
pub fn space_based_rolling(
    file_path: &str,
    base_file_path: &str,
    date_str: &str,
    max_size: u64,
) -> String {
    let mut final_path = file_path.to_string();
    let mut index = 1;
    while let Ok(metadata) = metadata(&final_path) {
        if metadata.len() > max_size {
            index += 1;
            final_path = compute_rolled_file_path(base_file_path, date_str, index);
        } else {
            break;
        }
    }
    final_path
}

/// Sets up logging by reading configuration from environment variables.
pub fn setup_logging() -> Result<(), LoggingError> {
    let config = LoggingConfig::from_env()?;
    init_logger(&config)?;
    info!(
        "Logging is successfully configured (mode: {}, level: {})",
        config.mode, config.level
    );
    Ok(())
}

fn init_logger(config: &LoggingConfig) -> Result<(), LoggingError> {
    match config.mode {
        LogMode::Stdout => SimpleLogger::init(config.level, Config::default())?,
        LogMode::File => {
            let date_str = Utc::now().format("%Y-%m-%d").to_string();
            let final_path = config.log_file_path(&date_str);

            if let Some(parent) = Path::new(&final_path).parent() {
                create_dir_all(parent)?;
            }

            let log_file = if Path::new(&final_path).exists() {
                OpenOptions::new().append(true).open(&final_path)?
            } else {
                File::create(&final_path)?
            };
            WriteLogger::init(config.level, Config::default(), log_file)?
        }
    }
    Ok(())
}
