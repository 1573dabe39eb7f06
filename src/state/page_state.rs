//! Index page state machine.
//!
//! The page shows exactly one of four bodies. Which one is derived from
//! the data layer's fetch flags and the number of visible series, so
//! render code matches on a single enum instead of combining booleans.

use crate::source::SeriesLibrary;

/// What the series index page body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    /// Nothing loaded yet. Shows a loading indicator.
    Loading,
    /// The last fetch failed. Shows "Unable to load series".
    Error,
    /// Loaded, but there are no series to list.
    Empty,
    /// Loaded with series. Mounts the active renderer, footer, and jump bar.
    Loaded,
}

impl PageState {
    /// Derive the page state from the fetch flags.
    ///
    /// | error | fetching | populated | count | state   |
    /// |-------|----------|-----------|-------|---------|
    /// | yes   | no       | any       | any   | Error   |
    /// | any   | any      | no        | any   | Loading |
    /// | yes   | yes      | yes       | any   | Error   |
    /// | no    | any      | yes       | 0     | Empty   |
    /// | no    | any      | yes       | >0    | Loaded  |
    pub fn derive(is_fetching: bool, is_populated: bool, has_error: bool, item_count: usize) -> Self {
        if has_error && !is_fetching {
            return PageState::Error;
        }
        if !is_populated {
            return PageState::Loading;
        }
        if has_error {
            return PageState::Error;
        }
        if item_count == 0 {
            PageState::Empty
        } else {
            PageState::Loaded
        }
    }

    /// Derive from a library and the number of series that survive the
    /// active filter.
    pub fn from_library(library: &SeriesLibrary, visible_count: usize) -> Self {
        Self::derive(
            library.is_fetching(),
            library.is_populated(),
            library.error().is_some(),
            visible_count,
        )
    }

    /// Whether the renderer and footer are mounted.
    pub fn is_loaded(self) -> bool {
        self == PageState::Loaded
    }

    /// Whether the jump bar may be shown. It additionally needs at
    /// least one target.
    pub fn shows_jump_bar(self, target_count: usize) -> bool {
        self.is_loaded() && target_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::error::InputError;
    use crate::model::Series;

    #[test]
    fn fetching_before_first_population_is_loading() {
        assert_eq!(PageState::derive(true, false, false, 0), PageState::Loading);
    }

    #[test]
    fn idle_and_unpopulated_is_loading() {
        assert_eq!(PageState::derive(false, false, false, 0), PageState::Loading);
    }

    #[test]
    fn error_after_fetch_is_error_regardless_of_items() {
        assert_eq!(PageState::derive(false, false, true, 0), PageState::Error);
        assert_eq!(PageState::derive(false, true, true, 12), PageState::Error);
    }

    #[test]
    fn error_during_first_fetch_stays_loading() {
        assert_eq!(PageState::derive(true, false, true, 0), PageState::Loading);
    }

    #[test]
    fn error_during_refetch_of_populated_library_is_error() {
        assert_eq!(PageState::derive(true, true, true, 3), PageState::Error);
    }

    #[test]
    fn populated_without_items_is_empty() {
        assert_eq!(PageState::derive(false, true, false, 0), PageState::Empty);
    }

    #[test]
    fn populated_with_items_is_loaded_even_while_refetching() {
        assert_eq!(PageState::derive(false, true, false, 5), PageState::Loaded);
        assert_eq!(PageState::derive(true, true, false, 5), PageState::Loaded);
    }

    #[test]
    fn exhaustive_flag_grid_is_total() {
        for fetching in [false, true] {
            for populated in [false, true] {
                for error in [false, true] {
                    for count in [0, 1] {
                        let state = PageState::derive(fetching, populated, error, count);
                        if state == PageState::Loaded {
                            assert!(populated && !error && count > 0);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn jump_bar_requires_loaded_and_targets() {
        assert!(PageState::Loaded.shows_jump_bar(3));
        assert!(!PageState::Loaded.shows_jump_bar(0));
        assert!(!PageState::Empty.shows_jump_bar(3));
        assert!(!PageState::Error.shows_jump_bar(3));
    }

    #[test]
    fn from_library_reads_flags() {
        let mut library = SeriesLibrary::from_items(vec![Series::new(1, "A", "a")]);
        assert_eq!(PageState::from_library(&library, 1), PageState::Loaded);
        assert_eq!(PageState::from_library(&library, 0), PageState::Empty);

        library.fail(InputError::NoLibrary);
        assert_eq!(PageState::from_library(&library, 1), PageState::Error);
    }
}
