//! Application state and transitions.
//!
//! AppState holds UI-only state: which page is showing, the menu
//! selections feeding the series index, which modal is open, and where
//! keyboard focus sits. The series collection itself lives in the data
//! layer ([`crate::source::SeriesLibrary`]).

use crate::model::{SeriesFilter, SortSpec, ViewMode};
use crate::state::jump_bar::JumpTarget;
use crate::state::logs_route::{self, LogsView};
use crate::state::poster_options::{PosterOptions, PosterOptionsModal};

/// Top-level page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    /// The series index.
    #[default]
    SeriesIndex,
    /// The system logs page on one of its sub-views.
    Logs(LogsView),
}

/// Keyboard focus on the series index page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexFocus {
    /// The mounted table or poster view.
    #[default]
    Content,
    /// The jump bar.
    JumpBar,
}

/// Application state. Pure data, no side effects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Page currently showing.
    pub page: Page,
    /// Active sort selection.
    pub sort: SortSpec,
    /// Active filter selection.
    pub filter: SeriesFilter,
    /// Active view selection.
    pub view: ViewMode,
    /// Poster options and whether their modal is open.
    pub poster_options: PosterOptionsModal,
    /// Where keyboard focus sits on the index page.
    pub focus: IndexFocus,
    /// Highlighted jump-bar entry while the jump bar has focus.
    pub jump_bar_selected: usize,
    /// "Update all series" is running.
    pub is_refreshing_series: bool,
    /// "Start RSS Sync" is running.
    pub is_rss_sync_executing: bool,
}

impl AppState {
    /// Initial state from resolved menu selections.
    pub fn new(
        view: ViewMode,
        sort: SortSpec,
        filter: SeriesFilter,
        poster_options: PosterOptions,
    ) -> Self {
        Self {
            view,
            sort,
            filter,
            poster_options: PosterOptionsModal::new(poster_options),
            ..Self::default()
        }
    }

    /// Switch to the series index.
    pub fn show_index(&mut self) {
        self.page = Page::SeriesIndex;
    }

    /// Switch to the logs page on `view`.
    pub fn show_logs(&mut self, view: LogsView) {
        self.page = Page::Logs(view);
    }

    /// Navigate to a logs path. Unknown paths leave the page unchanged.
    pub fn navigate(&mut self, path: &str) -> bool {
        match logs_route::route(path) {
            Some(view) => {
                self.show_logs(view);
                true
            }
            None => false,
        }
    }

    /// On the logs page, advance to the next sub-view.
    pub fn next_logs_view(&mut self) {
        if let Page::Logs(view) = self.page {
            self.page = Page::Logs(view.next());
        }
    }

    /// Toggle focus between the content and the jump bar. The jump bar
    /// can only take focus when it has entries.
    pub fn toggle_jump_bar_focus(&mut self, target_count: usize) {
        self.focus = match self.focus {
            IndexFocus::Content if target_count > 0 => {
                self.jump_bar_selected = self.jump_bar_selected.min(target_count - 1);
                IndexFocus::JumpBar
            }
            _ => IndexFocus::Content,
        };
    }

    /// Move the jump-bar highlight, saturating at both ends.
    pub fn move_jump_bar(&mut self, delta: isize, target_count: usize) {
        if target_count == 0 {
            self.jump_bar_selected = 0;
            return;
        }
        let next = (self.jump_bar_selected as isize + delta).clamp(0, target_count as isize - 1);
        self.jump_bar_selected = next as usize;
    }

    /// The highlighted jump target, if the index is in range.
    pub fn selected_jump_target(&self, targets: &[JumpTarget]) -> Option<JumpTarget> {
        targets.get(self.jump_bar_selected).copied()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
