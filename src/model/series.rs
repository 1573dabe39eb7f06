//! Series records supplied by the data layer.

use super::SeriesId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Airing status of a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesStatus {
    /// Still airing.
    #[default]
    Continuing,
    /// Finished airing.
    Ended,
    /// Announced but not yet aired.
    Upcoming,
}

impl SeriesStatus {
    /// Lowercase wire token.
    pub fn as_str(self) -> &'static str {
        match self {
            SeriesStatus::Continuing => "continuing",
            SeriesStatus::Ended => "ended",
            SeriesStatus::Upcoming => "upcoming",
        }
    }

    /// Short label for the table's status column.
    pub fn label(self) -> &'static str {
        match self {
            SeriesStatus::Continuing => "Continuing",
            SeriesStatus::Ended => "Ended",
            SeriesStatus::Upcoming => "Upcoming",
        }
    }
}

/// A series in the library.
///
/// `sort_title` is the normalized ordering key (leading articles
/// stripped by the server). It drives sorting and jump-bar bucketing
/// and is never displayed. It may be empty for malformed
/// records; such series are still listed but contribute no jump target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Library identifier.
    pub id: SeriesId,
    /// Display title.
    pub title: String,
    /// Normalized ordering key.
    #[serde(default)]
    pub sort_title: String,
    /// First-aired year.
    #[serde(default)]
    pub year: Option<u16>,
    /// Airing status.
    #[serde(default)]
    pub status: SeriesStatus,
    /// Whether new episodes are tracked.
    #[serde(default)]
    pub monitored: bool,
    /// Broadcasting network.
    #[serde(default)]
    pub network: Option<String>,
    /// Number of seasons.
    #[serde(default)]
    pub season_count: u32,
    /// Episodes aired so far.
    #[serde(default)]
    pub episode_count: u32,
    /// Episodes with a file on disk.
    #[serde(default)]
    pub episode_file_count: u32,
    /// Total bytes on disk.
    #[serde(default)]
    pub size_on_disk: u64,
    /// When the series was added to the library.
    #[serde(default)]
    pub added: Option<DateTime<Utc>>,
}

impl Series {
    /// Minimal series with everything but identity and titles defaulted.
    pub fn new(id: u32, title: impl Into<String>, sort_title: impl Into<String>) -> Self {
        Self {
            id: SeriesId::new(id),
            title: title.into(),
            sort_title: sort_title.into(),
            year: None,
            status: SeriesStatus::default(),
            monitored: true,
            network: None,
            season_count: 0,
            episode_count: 0,
            episode_file_count: 0,
            size_on_disk: 0,
            added: None,
        }
    }

    /// Fraction of episodes with files, in `0.0..=1.0`.
    ///
    /// A series with no known episodes counts as complete.
    pub fn episode_progress(&self) -> f64 {
        if self.episode_count == 0 {
            return 1.0;
        }
        f64::from(self.episode_file_count.min(self.episode_count)) / f64::from(self.episode_count)
    }

    /// True when some aired episodes have no file.
    pub fn is_missing_episodes(&self) -> bool {
        self.episode_file_count < self.episode_count
    }
}
