//! Identifier newtypes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a series within the library.
///
/// Assigned by the data layer; the UI only compares and hashes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(u32);

impl SeriesId {
    /// Wrap a raw id.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw id.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
