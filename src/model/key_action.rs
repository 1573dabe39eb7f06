//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Navigation within the mounted view
    /// Move selection up one row. Default: k/↑
    ScrollUp,
    /// Move selection down one row. Default: j/↓
    ScrollDown,
    /// Move selection left one poster. Default: h/←
    ScrollLeft,
    /// Move selection right one poster. Default: l/→
    ScrollRight,
    /// Move up one page. Default: Ctrl+u/Page Up
    PageUp,
    /// Move down one page. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to first series. Default: g/Home
    ScrollToTop,
    /// Jump to last series. Default: G/End
    ScrollToBottom,

    // Focus
    /// Index page: toggle focus between content and jump bar.
    /// Logs page: next sub-view. Default: Tab
    CycleFocus,
    /// Press the focused jump-bar entry. Default: Enter
    Activate,
    /// Leave the current overlay, jump bar, or page. Default: Esc
    Back,

    // Menus
    /// Next entry in the view menu. Default: v
    CycleView,
    /// Next entry in the sort menu. Default: s
    CycleSort,
    /// Flip the sort direction. Default: S
    ToggleSortDirection,
    /// Next entry in the filter menu. Default: f
    CycleFilter,
    /// Open poster options (posters view only). Default: o
    PosterOptions,

    // Toolbar
    /// Update all series (reload library). Default: u
    RefreshSeries,
    /// Start RSS sync. Default: y
    RssSync,

    // Pages
    /// Show the series index. Default: 1
    ShowIndex,
    /// Show the system logs page. Default: 2
    ShowLogs,

    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
