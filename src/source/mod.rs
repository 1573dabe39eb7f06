//! Series library data layer.
//!
//! This module owns the series collection and its fetch flags:
//! - File loading of a JSON series library (`file`)
//! - Log file discovery for the system logs page (`log_files`)
//! - [`SeriesLibrary`], which the index page reads through narrow getters

use crate::model::error::InputError;
use crate::model::Series;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod file;
pub mod log_files;

pub use file::load_series_file;
pub use log_files::{list_log_files, tail_lines, LogFileEntry};

/// The series collection plus the fetch-result flags the index page
/// gates on.
///
/// Loading is synchronous: `refresh` passes through the fetching state
/// and lands in either populated or error before returning. The flags
/// stay separate so the page can still describe every combination.
#[derive(Debug, Default)]
pub struct SeriesLibrary {
    path: Option<PathBuf>,
    items: Vec<Series>,
    is_fetching: bool,
    is_populated: bool,
    error: Option<InputError>,
}

impl SeriesLibrary {
    /// Create an unpopulated library backed by `path`.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }

    /// Create a library already populated with `items`.
    pub fn from_items(items: Vec<Series>) -> Self {
        let mut library = Self::default();
        library.complete(items);
        library
    }

    /// Backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Series from the last successful fetch.
    pub fn items(&self) -> &[Series] {
        &self.items
    }

    /// True while a fetch is in flight.
    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    /// True once any fetch has completed successfully.
    pub fn is_populated(&self) -> bool {
        self.is_populated
    }

    /// Error from the last failed fetch.
    pub fn error(&self) -> Option<&InputError> {
        self.error.as_ref()
    }

    /// Mark a fetch as in flight. Existing items stay visible.
    pub fn begin_fetch(&mut self) {
        self.is_fetching = true;
    }

    /// Finish a fetch successfully.
    pub fn complete(&mut self, items: Vec<Series>) {
        debug!(count = items.len(), "Series library populated");
        self.items = items;
        self.is_fetching = false;
        self.is_populated = true;
        self.error = None;
    }

    /// Finish a fetch with an error. Previously loaded items are kept
    /// but the error takes precedence on the index page.
    pub fn fail(&mut self, error: InputError) {
        warn!(error = %error, "Series library fetch failed");
        self.is_fetching = false;
        self.error = Some(error);
    }

    /// Reload from the backing file.
    ///
    /// Returns `true` when the library ended up populated without error.
    pub fn refresh(&mut self) -> bool {
        self.begin_fetch();

        let result = match &self.path {
            Some(path) => load_series_file(path),
            None => Err(InputError::NoLibrary),
        };

        match result {
            Ok(items) => {
                self.complete(items);
                true
            }
            Err(error) => {
                self.fail(error);
                false
            }
        }
    }
}
