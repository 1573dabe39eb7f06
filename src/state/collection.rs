//! Filtering and sorting of the visible series list (pure).

use crate::model::{Series, SeriesFilter, SortDirection, SortKey, SortSpec};
use std::cmp::Ordering;

/// Series that pass `filter`, ordered by `sort`.
pub fn visible_series(all: &[Series], filter: SeriesFilter, sort: &SortSpec) -> Vec<Series> {
    let mut visible: Vec<Series> = all.iter().filter(|s| filter.matches(s)).cloned().collect();
    sort_series(&mut visible, sort);
    visible
}

/// Stable sort by `spec`. Ties on the primary key fall back to the sort
/// title; unknown keys order by sort title alone.
pub fn sort_series(items: &mut [Series], spec: &SortSpec) {
    items.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, &spec.key).then_with(|| a.sort_title.cmp(&b.sort_title));
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare_by_key(a: &Series, b: &Series, key: &SortKey) -> Ordering {
    match key {
        SortKey::SortTitle | SortKey::Other(_) => Ordering::Equal,
        SortKey::Status => a.status.cmp(&b.status),
        SortKey::Network => a.network.cmp(&b.network),
        SortKey::SeasonCount => a.season_count.cmp(&b.season_count),
        SortKey::EpisodeProgress => a
            .episode_progress()
            .total_cmp(&b.episode_progress())
            .then_with(|| a.episode_count.cmp(&b.episode_count)),
        SortKey::SizeOnDisk => a.size_on_disk.cmp(&b.size_on_disk),
        SortKey::Added => a.added.cmp(&b.added),
        SortKey::Year => a.year.cmp(&b.year),
    }
}
