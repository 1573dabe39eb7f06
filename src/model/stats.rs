//! Aggregate totals shown in the series index footer.

use super::{Series, SeriesStatus};

/// Totals over the series currently listed on the index page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LibraryStats {
    /// Number of series listed.
    pub series: usize,
    /// Monitored series.
    pub monitored: usize,
    /// Unmonitored series.
    pub unmonitored: usize,
    /// Series still airing.
    pub continuing: usize,
    /// Series that have ended.
    pub ended: usize,
    /// Aired episodes across all series.
    pub episodes: u64,
    /// Episodes with a file on disk.
    pub episode_files: u64,
    /// Total bytes on disk.
    pub size_on_disk: u64,
}

impl LibraryStats {
    /// Fold totals over `items`.
    pub fn from_series(items: &[Series]) -> Self {
        items.iter().fold(Self::default(), |mut acc, s| {
            acc.series += 1;
            if s.monitored {
                acc.monitored += 1;
            } else {
                acc.unmonitored += 1;
            }
            match s.status {
                SeriesStatus::Continuing => acc.continuing += 1,
                SeriesStatus::Ended => acc.ended += 1,
                SeriesStatus::Upcoming => {}
            }
            acc.episodes += u64::from(s.episode_count);
            acc.episode_files += u64::from(s.episode_file_count);
            acc.size_on_disk += s.size_on_disk;
            acc
        })
    }
}

/// Human-readable byte size using binary units ("1.5 GiB").
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
