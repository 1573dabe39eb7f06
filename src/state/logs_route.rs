//! Route table for the system logs page.
//!
//! Three sub-views are reachable under `/system/logs`. Routes are tried
//! in order and the first match wins: the root matches exactly, the
//! other two match their path and anything below it.

use std::fmt;

/// Root of the logs page.
pub const LOGS_ROOT: &str = "/system/logs";

/// Sub-view of the logs page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogsView {
    /// Tail of the current log file.
    Table,
    /// Log files in the log directory.
    Files,
    /// Log files written by the updater.
    UpdateFiles,
}

struct Route {
    path: &'static str,
    exact: bool,
    view: LogsView,
}

const ROUTES: [Route; 3] = [
    Route {
        path: LOGS_ROOT,
        exact: true,
        view: LogsView::Table,
    },
    Route {
        path: "/system/logs/files",
        exact: false,
        view: LogsView::Files,
    },
    Route {
        path: "/system/logs/updatefiles",
        exact: false,
        view: LogsView::UpdateFiles,
    },
];

impl Route {
    fn matches(&self, path: &str) -> bool {
        if self.exact {
            return path == self.path;
        }
        match path.strip_prefix(self.path) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// Resolve a path to a logs sub-view. `None` means no route matched.
///
/// A single trailing slash is ignored.
pub fn route(path: &str) -> Option<LogsView> {
    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };
    ROUTES.iter().find(|r| r.matches(path)).map(|r| r.view)
}

impl LogsView {
    /// Sub-views in tab order.
    pub const ALL: [LogsView; 3] = [LogsView::Table, LogsView::Files, LogsView::UpdateFiles];

    /// Canonical path for this view.
    pub fn path(self) -> &'static str {
        match self {
            LogsView::Table => ROUTES[0].path,
            LogsView::Files => ROUTES[1].path,
            LogsView::UpdateFiles => ROUTES[2].path,
        }
    }

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            LogsView::Table => "Logs",
            LogsView::Files => "Log Files",
            LogsView::UpdateFiles => "Updater Logs",
        }
    }

    /// Next tab, wrapping.
    pub fn next(self) -> Self {
        match self {
            LogsView::Table => LogsView::Files,
            LogsView::Files => LogsView::UpdateFiles,
            LogsView::UpdateFiles => LogsView::Table,
        }
    }

    /// Position in [`LogsView::ALL`].
    pub fn index(self) -> usize {
        match self {
            LogsView::Table => 0,
            LogsView::Files => 1,
            LogsView::UpdateFiles => 2,
        }
    }
}

impl fmt::Display for LogsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
