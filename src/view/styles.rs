//! Shared styles.

use ratatui::style::{Color, Modifier, Style};

/// Border of the focused pane.
pub const FOCUSED_BORDER: Style = Style::new().fg(Color::Cyan);

/// Border of an unfocused pane.
pub const UNFOCUSED_BORDER: Style = Style::new().fg(Color::DarkGray);

/// Selected row or cell.
pub const SELECTED: Style = Style::new().fg(Color::Black).bg(Color::Yellow);

/// Table header row.
pub const HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Key hint in the toolbar and popups.
pub const KEY_HINT: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Dimmed secondary text.
pub const DIM: Style = Style::new().fg(Color::DarkGray);

/// Error message text.
pub const ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Unmonitored series.
pub const UNMONITORED: Style = Style::new().fg(Color::DarkGray);

/// Border of the selected poster cell.
pub const SELECTED_BORDER: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
