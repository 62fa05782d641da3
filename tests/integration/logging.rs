//! File logging integration tests.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: when using file mode, the directory of the log file (default "./logs")
//!   Refer to `src/logging/mod.rs` for more details.
use chrono::Utc;
use rollup_network_resolver::logging::{
    setup_logging, space_based_rolling, time_based_rolling, LoggingConfig, LoggingError,
};
use std::{
    env, fs,
    fs::{create_dir_all, remove_dir_all},
    io::Write,
    path::Path,
    sync::Mutex,
    thread,
    time::Duration,
};
use tempfile::TempDir;

use lazy_static::lazy_static;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

// The global logger can be installed once per process.
lazy_static! {
    static ref INIT_LOGGING: () = {
        setup_logging().expect("Failed to set up logging");
    };
}

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

#[test]
fn test_invalid_log_max_size() {
    let _guard = ENV_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    env::set_var("LOG_MODE", "file");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("LOG_DATA_DIR", temp_dir.path());
    env::set_var("LOG_MAX_SIZE", "invalid_value");

    // Fails before any logger is installed.
    let result = setup_logging();
    env::remove_var("LOG_MAX_SIZE");

    assert!(matches!(result, Err(LoggingError::InvalidMaxSize(_))));
}

#[test]
fn test_setup_logging_file_mode_creates_log_file() {
    let _guard = ENV_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_log_dir = temp_dir.path().to_str().unwrap();

    env::remove_var("LOG_MAX_SIZE");
    env::set_var("LOG_MODE", "file");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("LOG_DATA_DIR", format!("{}/", temp_log_dir));

    let _ = remove_dir_all(temp_log_dir);
    create_dir_all(temp_log_dir).expect("Failed to create log directory");

    *INIT_LOGGING;
    log::info!("resolver integration test");

    // Give the logger time to flush.
    thread::sleep(Duration::from_millis(200));

    let expected_path = time_based_rolling(
        &format!("{}/resolver.log", temp_log_dir),
        &today(),
        1,
    );

    assert!(
        Path::new(&expected_path).exists(),
        "Expected log file {} does not exist",
        expected_path
    );
}

#[test]
fn test_log_file_rolls_when_over_max_size() {
    let _guard = ENV_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_log_dir = temp_dir.path().to_str().unwrap();

    env::set_var("LOG_MODE", "file");
    env::set_var("LOG_DATA_DIR", temp_log_dir);
    env::set_var("LOG_MAX_SIZE", "10");

    let config = LoggingConfig::from_env().expect("Failed to read logging config");
    env::remove_var("LOG_MAX_SIZE");

    let date_str = today();
    let first = time_based_rolling(&config.base_file_path(), &date_str, 1);
    fs::write(&first, "Existing log file that is too large")
        .expect("Failed to create pre-existing log file");

    let rolled_path = config.log_file_path(&date_str);

    assert_ne!(rolled_path, first);
    assert!(
        rolled_path.ends_with(&format!("resolver-{}.2.log", date_str)),
        "unexpected rolled path {}",
        rolled_path
    );
}

#[test]
fn test_space_based_rolling_returns_original_when_under_max_size() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_log_dir = temp_dir.path().to_str().unwrap();
    let base_file_path = format!("{}/test_resolver.log", temp_log_dir);
    let date_str = today();
    let time_based_path = time_based_rolling(&base_file_path, &date_str, 1);

    let mut file = fs::File::create(&time_based_path).expect("Failed to create test log file");
    write!(file, "small file").expect("Failed to write to test log file");

    let rolled_file_path =
        space_based_rolling(&time_based_path, &base_file_path, &date_str, 10_000);

    assert_eq!(
        rolled_file_path, time_based_path,
        "space_based_rolling should return the original file path when within size threshold"
    );
}
