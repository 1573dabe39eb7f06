//! Jump-bar index computation (pure).
//!
//! The jump bar lists one entry per first-character bucket of the
//! visible series, so the user can scroll straight to the first series
//! starting with that character. Buckets only make sense while the
//! index is sorted alphabetically by sort title.
//!
//! # Collation
//!
//! Buckets are ordered by Unicode scalar value of the raw first
//! character, case-sensitive. `#` (U+0023) therefore precedes every
//! letter, and all uppercase ASCII letters precede all lowercase ones:
//! titles `Alpha, 1984, beta, 2001` give `# A b` ascending and
//! `b A #` descending. No case folding is applied.

use crate::model::{Series, SortDirection, SortKey};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::{debug, trace};

/// A jump-bar entry: the first character of a sort title, or `#` for
/// titles starting with a decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JumpTarget(char);

impl JumpTarget {
    /// Bucket for every title starting with an ASCII digit.
    pub const DIGITS: JumpTarget = JumpTarget('#');

    /// Target for the raw character `c`.
    pub fn new(c: char) -> Self {
        Self(c)
    }

    /// Character shown in the jump bar.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for JumpTarget {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl fmt::Display for JumpTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bucket a sort title falls into, or `None` for an empty title.
pub fn bucket_of(sort_title: &str) -> Option<JumpTarget> {
    let first = sort_title.chars().next()?;
    if first.is_ascii_digit() {
        Some(JumpTarget::DIGITS)
    } else {
        Some(JumpTarget(first))
    }
}

/// Build the ordered, de-duplicated jump targets for `items`.
///
/// Returns an empty list unless `sort_key` is the title-sort key.
/// Series with an empty sort title are skipped.
pub fn build_jump_targets(
    items: &[Series],
    sort_key: &SortKey,
    direction: SortDirection,
) -> Vec<JumpTarget> {
    if !sort_key.is_sort_title() {
        return Vec::new();
    }

    let mut characters: Vec<JumpTarget> = items
        .iter()
        .filter_map(|series| {
            let bucket = bucket_of(&series.sort_title);
            if bucket.is_none() {
                trace!(id = %series.id, "Skipping series with empty sort title");
            }
            bucket
        })
        .collect();

    characters.sort_unstable();

    if direction == SortDirection::Descending {
        characters.reverse();
    }

    characters.dedup();
    characters
}

/// Bucket of each row in display order, for locating the first row of
/// a bucket without holding on to the series themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketIndex(Vec<Option<JumpTarget>>);

impl BucketIndex {
    /// Buckets of `items`, in the same order.
    pub fn from_series(items: &[Series]) -> Self {
        Self(items.iter().map(|s| bucket_of(&s.sort_title)).collect())
    }

    /// Number of rows indexed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no rows are indexed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Row of the first item in `target`'s bucket.
    pub fn first_index(&self, target: JumpTarget) -> Option<usize> {
        self.0.iter().position(|bucket| *bucket == Some(target))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    fingerprint: u64,
    len: usize,
    sort_key: SortKey,
    direction: SortDirection,
}

impl CacheKey {
    fn new(items: &[Series], sort_key: &SortKey, direction: SortDirection) -> Self {
        let mut hasher = DefaultHasher::new();
        for series in items {
            series.id.hash(&mut hasher);
            series.sort_title.hash(&mut hasher);
        }
        Self {
            fingerprint: hasher.finish(),
            len: items.len(),
            sort_key: sort_key.clone(),
            direction,
        }
    }
}

/// Memoized jump targets.
///
/// Recomputes only when the items (identity and sort title, in order),
/// the sort key, or the sort direction differ from the last call.
#[derive(Debug, Clone, Default)]
pub struct JumpBarCache {
    key: Option<CacheKey>,
    targets: Vec<JumpTarget>,
    computations: usize,
}

impl JumpBarCache {
    /// Empty cache; the first lookup always computes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets for the given inputs, rebuilt only when they changed.
    pub fn get_or_compute(
        &mut self,
        items: &[Series],
        sort_key: &SortKey,
        direction: SortDirection,
    ) -> &[JumpTarget] {
        let key = CacheKey::new(items, sort_key, direction);
        if self.key.as_ref() != Some(&key) {
            self.targets = build_jump_targets(items, sort_key, direction);
            self.computations += 1;
            debug!(
                sort_key = %sort_key,
                ?direction,
                targets = self.targets.len(),
                "Recomputed jump bar"
            );
            self.key = Some(key);
        }
        &self.targets
    }

    /// Number of times the targets were actually rebuilt.
    pub fn computations(&self) -> usize {
        self.computations
    }
}

#[cfg(test)]
#[path = "jump_bar_tests.rs"]
mod tests;
