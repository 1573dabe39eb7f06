//! Error types for sidx.
//!
//! Errors are split by concern and compose through `From` so the shell
//! layer can propagate with `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error returned from the application shell
//!   - [`InputError`] - reading or decoding the series library
//!   - `std::io::Error` - terminal failures
//!
//! # Recovery Strategy
//!
//! Library errors are **non-fatal** once the TUI is running: they are
//! recorded on the [`crate::source::SeriesLibrary`] and the index page
//! degrades to its error state ("Unable to load series"). Only terminal
//! errors abort the program.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the series library.
    #[error("Failed to load series library: {0}")]
    Input(#[from] InputError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when loading the series library.
#[derive(Debug, Error)]
pub enum InputError {
    /// The library file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use sidx::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/series.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/series.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// The library file exists but is not a JSON array of series.
    #[error("Malformed series library {path}: {reason}")]
    Malformed {
        /// The file that failed to decode.
        path: PathBuf,
        /// Decoder message, including line and column.
        reason: String,
    },

    /// No library path was configured.
    #[error("No series library configured: pass a path or set SIDX_LIBRARY")]
    NoLibrary,

    /// Generic I/O error reading the library.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_converts_into_app_error() {
        fn load() -> Result<(), InputError> {
            Err(InputError::NoLibrary)
        }
        fn run() -> Result<(), AppError> {
            load()?;
            Ok(())
        }

        let err = run().unwrap_err();
        assert!(matches!(err, AppError::Input(InputError::NoLibrary)));
        assert!(err.to_string().contains("SIDX_LIBRARY"));
    }

    #[test]
    fn malformed_error_mentions_path_and_reason() {
        let err = InputError::Malformed {
            path: PathBuf::from("lib.json"),
            reason: "expected value at line 1 column 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("lib.json"));
        assert!(msg.contains("line 1 column 1"));
    }

    #[test]
    fn io_error_converts_via_from() {
        let io_err = std::io::Error::other("disk on fire");
        let err: InputError = io_err.into();
        assert!(matches!(err, InputError::Io(_)));
    }
}
