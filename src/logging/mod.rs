//! Tracing subscriber initialization.
//!
//! The TUI owns the terminal, so logs go to a file. Users can follow
//! them with `tail -f` or on the system logs page.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Log path has no file name component
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Split a log path into the directory to write in and the file name.
///
/// A bare file name logs into the current directory.
pub fn split_log_path(log_path: &Path) -> Result<(PathBuf, String), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?
        .to_string();

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((directory, file_name))
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Respects `RUST_LOG`, defaulting to [`DEFAULT_FILTER`]. Creates the log
/// directory if it doesn't exist.
///
/// # Errors
///
/// Returns `LoggingError` if the path has no file name, the directory
/// cannot be created, or a subscriber was already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let (directory, file_name) = split_log_path(log_path)?;

    std::fs::create_dir_all(&directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.clone(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(&directory, file_name);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    fn split_log_path_separates_directory_and_name() {
        let (dir, name) = split_log_path(Path::new("/var/log/sidx/sidx.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/var/log/sidx"));
        assert_eq!(name, "sidx.log");
    }

    #[test]
    fn bare_file_name_logs_into_current_directory() {
        let (dir, name) = split_log_path(Path::new("sidx.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "sidx.log");
    }

    #[test]
    fn root_path_is_invalid() {
        let err = split_log_path(Path::new("/")).unwrap_err();
        assert!(matches!(err, LoggingError::InvalidPath(_)));
    }

    #[test]
    #[serial(tracing_init)]
    fn init_creates_log_directory_if_missing() {
        let test_dir = std::env::temp_dir().join("sidx_test_logs_create");
        let log_file = test_dir.join("test.log");
        let _ = fs::remove_dir_all(&test_dir);

        // May fail if a subscriber is already set; the directory is
        // created before that check.
        let _ = init(&log_file);

        assert!(test_dir.exists(), "Log directory should be created: {:?}", test_dir);
        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_reports_subscriber_already_set() {
        let test_dir = std::env::temp_dir().join("sidx_test_logs_twice");
        let log_file = test_dir.join("test.log");

        let _ = init(&log_file);
        let second = init(&log_file);

        assert!(matches!(second, Err(LoggingError::SubscriberAlreadySet)));
        let _ = fs::remove_dir_all(&test_dir);
    }
}
