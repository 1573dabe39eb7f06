//! Series index toolbar.
//!
//! Left side holds the actions, right side the view/sort/filter menus.
//! The poster options button and its separator only exist in the
//! posters view.

use super::styles;
use crate::model::ViewMode;
use crate::state::AppState;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SPINNER_MARK: &str = "⟳";

/// One toolbar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarItem {
    /// A key-activated command.
    Button {
        /// Key that triggers it.
        key: char,
        /// Text after the key hint.
        label: String,
        /// Command is running.
        is_spinning: bool,
    },
    /// Gap between button groups.
    Separator,
}

impl ToolbarItem {
    fn button(key: char, label: impl Into<String>) -> Self {
        ToolbarItem::Button {
            key,
            label: label.into(),
            is_spinning: false,
        }
    }

    fn spinning(key: char, label: impl Into<String>, is_spinning: bool) -> Self {
        ToolbarItem::Button {
            key,
            label: label.into(),
            is_spinning,
        }
    }
}

/// Toolbar entries for the current state, left to right.
pub fn toolbar_items(state: &AppState) -> Vec<ToolbarItem> {
    let mut items = vec![
        ToolbarItem::spinning('u', "Update all", state.is_refreshing_series),
        ToolbarItem::spinning('y', "RSS Sync", state.is_rss_sync_executing),
        ToolbarItem::Separator,
    ];

    if state.view == ViewMode::Posters {
        items.push(ToolbarItem::button('o', "Options"));
        items.push(ToolbarItem::Separator);
    }

    items.push(ToolbarItem::button('v', format!("View: {}", state.view.label())));
    items.push(ToolbarItem::button(
        's',
        format!("Sort: {} {}", state.sort.key.label(), state.sort.direction.arrow()),
    ));
    items.push(ToolbarItem::button('f', format!("Filter: {}", state.filter.label())));
    items
}

/// Draw the toolbar as one line of key hints.
pub fn render_toolbar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = Vec::new();
    for item in toolbar_items(state) {
        match item {
            ToolbarItem::Button {
                key,
                label,
                is_spinning,
            } => {
                spans.push(Span::styled(format!("[{key}]"), styles::KEY_HINT));
                spans.push(Span::raw(format!(" {label}")));
                if is_spinning {
                    spans.push(Span::styled(format!(" {SPINNER_MARK}"), styles::KEY_HINT));
                }
                spans.push(Span::raw("  "));
            }
            ToolbarItem::Separator => spans.push(Span::styled("│  ", styles::DIM)),
        }
    }

    let toolbar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::UNFOCUSED_BORDER),
    );
    frame.render_widget(toolbar, area);
}
