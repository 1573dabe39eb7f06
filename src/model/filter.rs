//! Filter presets offered by the series index filter menu.

use super::{Series, SeriesStatus};
use std::fmt;

/// Value half of a `(filterKey, filterValue)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// A boolean flag such as `monitored`.
    Bool(bool),
    /// A string value such as a status token.
    Text(String),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Bool(b) => write!(f, "{b}"),
            FilterValue::Text(s) => f.write_str(s),
        }
    }
}

/// A filter-menu entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SeriesFilter {
    /// Every series.
    #[default]
    All,
    /// Monitored series only.
    Monitored,
    /// Unmonitored series only.
    Unmonitored,
    /// Series still airing.
    Continuing,
    /// Series that have finished airing.
    Ended,
    /// Series with fewer episode files than episodes.
    Missing,
}

impl SeriesFilter {
    /// Entries in filter-menu order.
    pub const MENU: [SeriesFilter; 6] = [
        SeriesFilter::All,
        SeriesFilter::Monitored,
        SeriesFilter::Unmonitored,
        SeriesFilter::Continuing,
        SeriesFilter::Ended,
        SeriesFilter::Missing,
    ];

    /// Short name used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            SeriesFilter::All => "all",
            SeriesFilter::Monitored => "monitored",
            SeriesFilter::Unmonitored => "unmonitored",
            SeriesFilter::Continuing => "continuing",
            SeriesFilter::Ended => "ended",
            SeriesFilter::Missing => "missing",
        }
    }

    /// Parse a short name back into a filter.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::MENU.into_iter().find(|f| f.name() == name)
    }

    /// Label shown in the filter menu.
    pub fn label(self) -> &'static str {
        match self {
            SeriesFilter::All => "All",
            SeriesFilter::Monitored => "Monitored Only",
            SeriesFilter::Unmonitored => "Unmonitored Only",
            SeriesFilter::Continuing => "Continuing Only",
            SeriesFilter::Ended => "Ended Only",
            SeriesFilter::Missing => "Missing Episodes",
        }
    }

    /// Filter key, or `None` for the unfiltered view.
    pub fn key(self) -> Option<&'static str> {
        match self {
            SeriesFilter::All => None,
            SeriesFilter::Monitored | SeriesFilter::Unmonitored => Some("monitored"),
            SeriesFilter::Continuing | SeriesFilter::Ended => Some("status"),
            SeriesFilter::Missing => Some("missing"),
        }
    }

    /// Filter value paired with [`SeriesFilter::key`].
    pub fn value(self) -> Option<FilterValue> {
        match self {
            SeriesFilter::All => None,
            SeriesFilter::Monitored | SeriesFilter::Missing => Some(FilterValue::Bool(true)),
            SeriesFilter::Unmonitored => Some(FilterValue::Bool(false)),
            SeriesFilter::Continuing => Some(FilterValue::Text(SeriesStatus::Continuing.as_str().into())),
            SeriesFilter::Ended => Some(FilterValue::Text(SeriesStatus::Ended.as_str().into())),
        }
    }

    /// Resolve a `(key, value)` selection to a menu entry.
    pub fn from_key_value(key: Option<&str>, value: Option<&FilterValue>) -> Option<Self> {
        Self::MENU
            .into_iter()
            .find(|f| f.key() == key && f.value().as_ref() == value)
    }

    /// Whether `series` passes this filter.
    pub fn matches(self, series: &Series) -> bool {
        match self {
            SeriesFilter::All => true,
            SeriesFilter::Monitored => series.monitored,
            SeriesFilter::Unmonitored => !series.monitored,
            SeriesFilter::Continuing => series.status == SeriesStatus::Continuing,
            SeriesFilter::Ended => series.status == SeriesStatus::Ended,
            SeriesFilter::Missing => series.is_missing_episodes(),
        }
    }

    /// Next entry in menu order, wrapping.
    pub fn next(self) -> Self {
        let idx = Self::MENU.iter().position(|f| *f == self).unwrap_or(0);
        Self::MENU[(idx + 1) % Self::MENU.len()]
    }
}
