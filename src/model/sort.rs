//! Sort specification for the series index.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire name of the title-sort key. Jump-bar bucketing only applies
/// when the index is sorted by this key.
pub const SORT_TITLE_KEY: &str = "sortTitle";

/// Column the index is sorted by.
///
/// Keys are string-backed so that arbitrary keys coming from config or
/// commands survive as [`SortKey::Other`] instead of being rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Alphabetical by sort title.
    #[default]
    SortTitle,
    /// Airing status.
    Status,
    /// Broadcasting network.
    Network,
    /// Number of seasons.
    SeasonCount,
    /// Fraction of episodes on disk.
    EpisodeProgress,
    /// Bytes on disk.
    SizeOnDisk,
    /// Date added to the library.
    Added,
    /// First-aired year.
    Year,
    /// Key not known to the sort menu. Ordered by sort title.
    Other(String),
}

impl SortKey {
    /// Keys offered by the sort menu, in menu order.
    pub fn menu() -> [SortKey; 8] {
        [
            SortKey::SortTitle,
            SortKey::Status,
            SortKey::Network,
            SortKey::SeasonCount,
            SortKey::EpisodeProgress,
            SortKey::SizeOnDisk,
            SortKey::Added,
            SortKey::Year,
        ]
    }

    /// Parse a wire token. Unknown tokens become [`SortKey::Other`].
    pub fn from_token(token: &str) -> Self {
        match token {
            SORT_TITLE_KEY => SortKey::SortTitle,
            "status" => SortKey::Status,
            "network" => SortKey::Network,
            "seasonCount" => SortKey::SeasonCount,
            "episodeProgress" => SortKey::EpisodeProgress,
            "sizeOnDisk" => SortKey::SizeOnDisk,
            "added" => SortKey::Added,
            "year" => SortKey::Year,
            other => SortKey::Other(other.to_string()),
        }
    }

    /// Wire token for this key.
    pub fn as_str(&self) -> &str {
        match self {
            SortKey::SortTitle => SORT_TITLE_KEY,
            SortKey::Status => "status",
            SortKey::Network => "network",
            SortKey::SeasonCount => "seasonCount",
            SortKey::EpisodeProgress => "episodeProgress",
            SortKey::SizeOnDisk => "sizeOnDisk",
            SortKey::Added => "added",
            SortKey::Year => "year",
            SortKey::Other(raw) => raw,
        }
    }

    /// Label shown in the sort menu.
    pub fn label(&self) -> &str {
        match self {
            SortKey::SortTitle => "Title",
            SortKey::Status => "Status",
            SortKey::Network => "Network",
            SortKey::SeasonCount => "Seasons",
            SortKey::EpisodeProgress => "Episodes",
            SortKey::SizeOnDisk => "Size on Disk",
            SortKey::Added => "Added",
            SortKey::Year => "Year",
            SortKey::Other(raw) => raw,
        }
    }

    /// True when the visible ordering is alphabetical by title.
    pub fn is_sort_title(&self) -> bool {
        self.as_str() == SORT_TITLE_KEY
    }

    /// Next key in the sort menu. Unknown keys restart at the top.
    pub fn next(&self) -> Self {
        let menu = Self::menu();
        match menu.iter().position(|key| key == self) {
            Some(idx) => menu[(idx + 1) % menu.len()].clone(),
            None => SortKey::SortTitle,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// A to Z, smallest first.
    #[default]
    Ascending,
    /// Z to A, largest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow glyph shown next to the active sort label.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Active sort key and direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SortSpec {
    /// Column to sort by.
    pub key: SortKey,
    /// Ascending or descending.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Create a spec from its parts.
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Apply a sort-menu selection.
    ///
    /// Choosing the active key flips the direction; choosing a new key
    /// starts ascending.
    pub fn select(&self, key: SortKey) -> Self {
        if key == self.key {
            Self::new(key, self.direction.toggle())
        } else {
            Self::new(key, SortDirection::Ascending)
        }
    }
}
