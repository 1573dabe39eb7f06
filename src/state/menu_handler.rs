//! Sort, filter, and view menu commands.
//!
//! Pure functions that transform AppState in response to menu
//! selections. Each menu emits an [`IndexCommand`]; keyboard actions are
//! translated into the same commands so there is one code path.

use crate::model::{KeyAction, SeriesFilter, SortDirection, SortKey, SortSpec, ViewMode};
use crate::state::app_state::{AppState, IndexFocus};
use tracing::debug;

/// A menu selection on the series index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexCommand {
    /// Sort by `key`. Without a direction, selecting the active key
    /// flips direction and a new key starts ascending.
    SortSelect {
        /// Key to sort by.
        key: SortKey,
        /// Explicit direction, if any.
        direction: Option<SortDirection>,
    },
    /// Apply a filter preset.
    FilterSelect(SeriesFilter),
    /// Switch the view mode.
    ViewSelect(ViewMode),
}

/// Apply a menu command. Returns `true` if anything changed.
pub fn apply_command(state: &mut AppState, command: IndexCommand) -> bool {
    debug!(?command, "Applying index command");

    match command {
        IndexCommand::SortSelect { key, direction } => {
            let next = match direction {
                Some(direction) => SortSpec::new(key, direction),
                None => state.sort.select(key),
            };
            if next == state.sort {
                return false;
            }
            state.sort = next;
            reset_jump_bar(state);
            true
        }
        IndexCommand::FilterSelect(filter) => {
            if filter == state.filter {
                return false;
            }
            state.filter = filter;
            reset_jump_bar(state);
            true
        }
        IndexCommand::ViewSelect(view) => {
            if view == state.view {
                return false;
            }
            state.view = view;
            if view != ViewMode::Posters {
                state.poster_options.close();
            }
            true
        }
    }
}

/// Translate a menu key action into a command against the current state.
pub fn command_for_action(state: &AppState, action: KeyAction) -> Option<IndexCommand> {
    match action {
        KeyAction::CycleView => Some(IndexCommand::ViewSelect(state.view.next())),
        KeyAction::CycleSort => Some(IndexCommand::SortSelect {
            key: state.sort.key.next(),
            direction: None,
        }),
        KeyAction::ToggleSortDirection => Some(IndexCommand::SortSelect {
            key: state.sort.key.clone(),
            direction: None,
        }),
        KeyAction::CycleFilter => Some(IndexCommand::FilterSelect(state.filter.next())),
        _ => None,
    }
}

fn reset_jump_bar(state: &mut AppState) {
    state.jump_bar_selected = 0;
    state.focus = IndexFocus::Content;
}

#[cfg(test)]
#[path = "menu_handler_tests.rs"]
mod tests;
