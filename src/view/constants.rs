//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values.

/// Height of the toolbar in lines (border + content).
pub const TOOLBAR_HEIGHT: u16 = 3;

/// Height of the series footer in lines (border + content).
pub const FOOTER_HEIGHT: u16 = 3;

/// Narrowest jump bar column (border + one character).
pub const JUMP_BAR_MIN_WIDTH: u16 = 3;

/// Height of the logs page tab bar (border + content).
pub const LOGS_TAB_BAR_HEIGHT: u16 = 3;

/// Width of the poster options popup in columns.
pub const POSTER_OPTIONS_WIDTH: u16 = 40;

/// Height of the poster options popup in lines.
pub const POSTER_OPTIONS_HEIGHT: u16 = 7;

/// Number of log lines loaded for the logs table.
pub const LOG_TAIL_LINES: usize = 500;

/// Rows lost to the table's borders and header.
pub const TABLE_CHROME_ROWS: u16 = 3;
