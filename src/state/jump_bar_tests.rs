//! Tests for jump-bar computation and memoization.

use super::*;
use crate::model::SortKey;

// ===== Test Helpers =====

fn series(titles: &[&str]) -> Vec<Series> {
    titles
        .iter()
        .enumerate()
        .map(|(i, t)| Series::new(i as u32 + 1, *t, *t))
        .collect()
}

fn chars(targets: &[JumpTarget]) -> Vec<char> {
    targets.iter().map(|t| t.as_char()).collect()
}

fn joined(targets: &[JumpTarget]) -> String {
    targets
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

// ===== bucket_of =====

#[test]
fn bucket_of_digit_is_hash() {
    assert_eq!(bucket_of("1984"), Some(JumpTarget::DIGITS));
    assert_eq!(bucket_of("0"), Some(JumpTarget::DIGITS));
}

#[test]
fn bucket_of_letter_is_verbatim() {
    assert_eq!(bucket_of("beta"), Some(JumpTarget::new('b')));
    assert_eq!(bucket_of("Beta"), Some(JumpTarget::new('B')));
}

#[test]
fn bucket_of_empty_is_none() {
    assert_eq!(bucket_of(""), None);
}

#[test]
fn bucket_of_multibyte_first_char() {
    assert_eq!(bucket_of("Ōkami"), Some(JumpTarget::new('Ō')));
}

// ===== build_jump_targets =====

#[test]
fn mixed_titles_ascending_pinned_collation() {
    let items = series(&["Alpha", "1984", "beta", "2001"]);
    let targets = build_jump_targets(&items, &SortKey::SortTitle, SortDirection::Ascending);
    insta::assert_snapshot!(joined(&targets), @"# A b");
}

#[test]
fn mixed_titles_descending_is_reverse() {
    let items = series(&["Alpha", "1984", "beta", "2001"]);
    let targets = build_jump_targets(&items, &SortKey::SortTitle, SortDirection::Descending);
    assert_eq!(chars(&targets), vec!['b', 'A', '#']);
}

#[test]
fn non_title_sort_key_yields_empty() {
    let items = series(&["Alpha", "Beta"]);
    for key in [
        SortKey::Status,
        SortKey::Network,
        SortKey::Added,
        SortKey::Other("nextAiring".to_string()),
    ] {
        assert!(
            build_jump_targets(&items, &key, SortDirection::Ascending).is_empty(),
            "{key} should not produce jump targets"
        );
    }
}

#[test]
fn empty_items_yield_empty() {
    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        assert!(build_jump_targets(&[], &SortKey::SortTitle, direction).is_empty());
    }
}

#[test]
fn duplicates_collapse() {
    let items = series(&["apple", "avocado", "banana", "24", "7 days"]);
    let targets = build_jump_targets(&items, &SortKey::SortTitle, SortDirection::Ascending);
    assert_eq!(chars(&targets), vec!['#', 'a', 'b']);
}

#[test]
fn empty_sort_title_is_skipped() {
    let items = series(&["", "zorro", ""]);
    let targets = build_jump_targets(&items, &SortKey::SortTitle, SortDirection::Ascending);
    assert_eq!(chars(&targets), vec!['z']);
}

#[test]
fn only_empty_sort_titles_yield_empty() {
    let items = series(&["", ""]);
    assert!(build_jump_targets(&items, &SortKey::SortTitle, SortDirection::Ascending).is_empty());
}

#[test]
fn input_order_does_not_matter() {
    let a = series(&["charlie", "alpha", "bravo"]);
    let b = series(&["bravo", "charlie", "alpha"]);
    assert_eq!(
        build_jump_targets(&a, &SortKey::SortTitle, SortDirection::Ascending),
        build_jump_targets(&b, &SortKey::SortTitle, SortDirection::Ascending),
    );
}

#[test]
fn whitespace_and_punctuation_are_verbatim_buckets() {
    let items = series(&[" padded", "(untitled)"]);
    let targets = build_jump_targets(&items, &SortKey::SortTitle, SortDirection::Ascending);
    assert_eq!(chars(&targets), vec![' ', '(']);
}

// ===== BucketIndex =====

#[test]
fn bucket_index_finds_first_row_of_bucket() {
    let items = series(&["1984", "alpha", "avatar", "", "bravo"]);
    let index = BucketIndex::from_series(&items);

    assert_eq!(index.len(), 5);
    assert_eq!(index.first_index(JumpTarget::DIGITS), Some(0));
    assert_eq!(index.first_index(JumpTarget::new('a')), Some(1));
    assert_eq!(index.first_index(JumpTarget::new('b')), Some(4));
    assert_eq!(index.first_index(JumpTarget::new('z')), None);
}

// ===== JumpBarCache =====

#[test]
fn cache_computes_once_for_same_inputs() {
    let items = series(&["alpha", "bravo"]);
    let mut cache = JumpBarCache::new();

    cache.get_or_compute(&items, &SortKey::SortTitle, SortDirection::Ascending);
    let targets = cache
        .get_or_compute(&items, &SortKey::SortTitle, SortDirection::Ascending)
        .to_vec();

    assert_eq!(cache.computations(), 1);
    assert_eq!(chars(&targets), vec!['a', 'b']);
}

#[test]
fn cache_recomputes_on_direction_change() {
    let items = series(&["alpha", "bravo"]);
    let mut cache = JumpBarCache::new();

    cache.get_or_compute(&items, &SortKey::SortTitle, SortDirection::Ascending);
    let targets = cache
        .get_or_compute(&items, &SortKey::SortTitle, SortDirection::Descending)
        .to_vec();

    assert_eq!(cache.computations(), 2);
    assert_eq!(chars(&targets), vec!['b', 'a']);
}

#[test]
fn cache_recomputes_on_sort_key_change() {
    let items = series(&["alpha", "bravo"]);
    let mut cache = JumpBarCache::new();

    cache.get_or_compute(&items, &SortKey::SortTitle, SortDirection::Ascending);
    let targets = cache
        .get_or_compute(&items, &SortKey::Network, SortDirection::Ascending)
        .to_vec();

    assert_eq!(cache.computations(), 2);
    assert!(targets.is_empty());
}

#[test]
fn cache_recomputes_when_items_change() {
    let mut items = series(&["alpha", "bravo"]);
    let mut cache = JumpBarCache::new();
    cache.get_or_compute(&items, &SortKey::SortTitle, SortDirection::Ascending);

    items[1].sort_title = "charlie".to_string();
    let targets = cache
        .get_or_compute(&items, &SortKey::SortTitle, SortDirection::Ascending)
        .to_vec();

    assert_eq!(cache.computations(), 2);
    assert_eq!(chars(&targets), vec!['a', 'c']);
}

#[test]
fn cache_ignores_changes_outside_sort_title() {
    let mut items = series(&["alpha", "bravo"]);
    let mut cache = JumpBarCache::new();
    cache.get_or_compute(&items, &SortKey::SortTitle, SortDirection::Ascending);

    items[0].title = "Alpha (Remastered)".to_string();
    items[0].monitored = false;
    cache.get_or_compute(&items, &SortKey::SortTitle, SortDirection::Ascending);

    assert_eq!(cache.computations(), 1);
}

