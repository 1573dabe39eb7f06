//! Tests for menu command handling.
//!
//! Tests verify that:
//! - Sort selection toggles direction on the active key
//! - Explicit sort directions are applied verbatim
//! - Filter and view changes report whether anything changed
//! - Leaving the posters view closes the poster options modal
//! - Key actions map onto the same commands

use super::*;

#[test]
fn sort_select_same_key_toggles_direction() {
    let mut state = AppState::default();
    let changed = apply_command(
        &mut state,
        IndexCommand::SortSelect {
            key: SortKey::SortTitle,
            direction: None,
        },
    );
    assert!(changed);
    assert_eq!(state.sort.direction, SortDirection::Descending);
}

#[test]
fn sort_select_explicit_direction_is_applied() {
    let mut state = AppState::default();
    apply_command(
        &mut state,
        IndexCommand::SortSelect {
            key: SortKey::Year,
            direction: Some(SortDirection::Descending),
        },
    );
    assert_eq!(state.sort, SortSpec::new(SortKey::Year, SortDirection::Descending));
}

#[test]
fn sort_select_identical_spec_is_unchanged() {
    let mut state = AppState::default();
    let changed = apply_command(
        &mut state,
        IndexCommand::SortSelect {
            key: SortKey::SortTitle,
            direction: Some(SortDirection::Ascending),
        },
    );
    assert!(!changed);
}

#[test]
fn sort_change_resets_jump_bar_focus() {
    let mut state = AppState {
        focus: IndexFocus::JumpBar,
        jump_bar_selected: 3,
        ..AppState::default()
    };
    apply_command(
        &mut state,
        IndexCommand::SortSelect {
            key: SortKey::Status,
            direction: None,
        },
    );
    assert_eq!(state.focus, IndexFocus::Content);
    assert_eq!(state.jump_bar_selected, 0);
}

#[test]
fn filter_select_reports_change() {
    let mut state = AppState::default();
    assert!(apply_command(&mut state, IndexCommand::FilterSelect(SeriesFilter::Missing)));
    assert_eq!(state.filter, SeriesFilter::Missing);
    assert!(!apply_command(&mut state, IndexCommand::FilterSelect(SeriesFilter::Missing)));
}

#[test]
fn leaving_posters_closes_poster_options() {
    let mut state = AppState {
        view: ViewMode::Posters,
        ..AppState::default()
    };
    assert!(state.poster_options.open(state.view));

    apply_command(&mut state, IndexCommand::ViewSelect(ViewMode::Table));

    assert_eq!(state.view, ViewMode::Table);
    assert!(!state.poster_options.is_open);
}

#[test]
fn cycle_view_action_toggles_view() {
    let state = AppState::default();
    assert_eq!(
        command_for_action(&state, KeyAction::CycleView),
        Some(IndexCommand::ViewSelect(ViewMode::Posters))
    );
}

#[test]
fn cycle_sort_action_moves_to_next_key_ascending() {
    let mut state = AppState {
        sort: SortSpec::new(SortKey::SortTitle, SortDirection::Descending),
        ..AppState::default()
    };
    let command = command_for_action(&state, KeyAction::CycleSort).unwrap();
    apply_command(&mut state, command);
    assert_eq!(state.sort, SortSpec::new(SortKey::Status, SortDirection::Ascending));
}

#[test]
fn toggle_direction_action_keeps_key() {
    let mut state = AppState::default();
    let command = command_for_action(&state, KeyAction::ToggleSortDirection).unwrap();
    apply_command(&mut state, command);
    assert_eq!(state.sort, SortSpec::new(SortKey::SortTitle, SortDirection::Descending));
}

#[test]
fn non_menu_actions_map_to_nothing() {
    let state = AppState::default();
    assert_eq!(command_for_action(&state, KeyAction::ScrollDown), None);
    assert_eq!(command_for_action(&state, KeyAction::Quit), None);
}
