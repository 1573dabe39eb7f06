//! System logs page: tab bar over the routed sub-view.

use super::constants::{LOGS_TAB_BAR_HEIGHT, LOG_TAIL_LINES};
use super::styles;
use crate::model::stats::format_bytes;
use crate::source::{list_log_files, tail_lines, LogFileEntry};
use crate::state::LogsView;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Row, Table, Tabs},
    Frame,
};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Subdirectory of the log directory holding updater logs.
pub const UPDATE_LOG_DIR: &str = "update";

/// Data shown by the logs page, loaded when a sub-view is entered.
#[derive(Debug, Default)]
pub struct LogsData {
    /// Tail of the current log file.
    pub lines: Vec<String>,
    /// Files listed by the files sub-views.
    pub files: Vec<LogFileEntry>,
    /// Load failure, shown in place of the data.
    pub error: Option<String>,
    /// First visible line or row.
    pub scroll: usize,
}

impl LogsData {
    /// Load what `view` needs from disk. Failures are kept as a message.
    pub fn load(view: LogsView, log_path: &Path) -> Self {
        let log_dir = log_dir(log_path);
        let result = match view {
            LogsView::Table => tail_lines(log_path, LOG_TAIL_LINES).map(|lines| Self {
                lines,
                ..Self::default()
            }),
            LogsView::Files => list_log_files(&log_dir).map(|files| Self {
                files,
                ..Self::default()
            }),
            LogsView::UpdateFiles => {
                list_log_files(&log_dir.join(UPDATE_LOG_DIR)).map(|files| Self {
                    files,
                    ..Self::default()
                })
            }
        };

        result.unwrap_or_else(|e| {
            warn!(?view, error = %e, "Failed to load logs");
            Self {
                error: Some(e.to_string()),
                ..Self::default()
            }
        })
    }

    /// Number of scrollable rows for `view`.
    pub fn len(&self, view: LogsView) -> usize {
        match view {
            LogsView::Table => self.lines.len(),
            LogsView::Files | LogsView::UpdateFiles => self.files.len(),
        }
    }

    /// Scroll by `delta` rows, clamped to the rows of `view`.
    pub fn scroll_by(&mut self, delta: isize, view: LogsView) {
        let max = self.len(view).saturating_sub(1) as isize;
        self.scroll = (self.scroll as isize + delta).clamp(0, max.max(0)) as usize;
    }

    /// Scroll to the last row of `view`.
    pub fn scroll_to_end(&mut self, view: LogsView) {
        self.scroll = self.len(view).saturating_sub(1);
    }
}

fn log_dir(log_path: &Path) -> PathBuf {
    match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Draw the tab bar and the routed sub-view.
pub fn render_logs(frame: &mut Frame, area: Rect, view: LogsView, data: &LogsData) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(LOGS_TAB_BAR_HEIGHT), Constraint::Min(0)])
        .split(area);

    let titles: Vec<Line> = LogsView::ALL.iter().map(|v| Line::from(v.label())).collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Logs "))
        .highlight_style(styles::SELECTED)
        .select(view.index());
    frame.render_widget(tabs, chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::FOCUSED_BORDER)
        .title(format!(" {} ", view.path()));

    if let Some(error) = &data.error {
        let paragraph = Paragraph::new(Line::styled(error.as_str(), styles::ERROR)).block(block);
        frame.render_widget(paragraph, chunks[1]);
        return;
    }

    match view {
        LogsView::Table => {
            let lines: Vec<Line> = data
                .lines
                .iter()
                .skip(data.scroll)
                .map(|l| Line::from(l.as_str()))
                .collect();
            let body = if lines.is_empty() {
                Paragraph::new(Line::styled("Log file is empty", styles::DIM))
            } else {
                Paragraph::new(lines)
            };
            frame.render_widget(body.block(block), chunks[1]);
        }
        LogsView::Files | LogsView::UpdateFiles => {
            if data.files.is_empty() {
                let paragraph =
                    Paragraph::new(Line::styled("No log files found", styles::DIM)).block(block);
                frame.render_widget(paragraph, chunks[1]);
                return;
            }
            let rows: Vec<Row> = data
                .files
                .iter()
                .skip(data.scroll)
                .map(|f| {
                    Row::new(vec![
                        f.name.clone(),
                        f.modified
                            .map(|m| m.format("%Y-%m-%d %H:%M:%S").to_string())
                            .unwrap_or_default(),
                        format_bytes(f.size),
                    ])
                })
                .collect();
            let table = Table::new(
                rows,
                [
                    Constraint::Fill(1),
                    Constraint::Length(19),
                    Constraint::Length(10),
                ],
            )
            .header(Row::new(["Filename", "Last Write Time", "Size"]).style(styles::HEADER))
            .block(block);
            frame.render_widget(table, chunks[1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::fs;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sidx-logs-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn render_text(view: LogsView, data: &LogsData) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|frame| render_logs(frame, frame.area(), view, data))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn table_view_tails_current_log() {
        let dir = temp_dir("tail");
        let log = dir.join("sidx.log");
        fs::write(&log, "first line\nsecond line\n").unwrap();

        let data = LogsData::load(LogsView::Table, &log);

        assert_eq!(data.lines, vec!["first line", "second line"]);
        let text = render_text(LogsView::Table, &data);
        assert!(text.contains("second line"));
        assert!(text.contains("/system/logs"));
    }

    #[test]
    fn files_view_lists_log_directory() {
        let dir = temp_dir("files");
        fs::write(dir.join("sidx.log"), "x").unwrap();
        fs::write(dir.join("sidx.log.1"), "y").unwrap();
        fs::write(dir.join("notes.txt"), "z").unwrap();

        let data = LogsData::load(LogsView::Files, &dir.join("sidx.log"));

        let mut names: Vec<_> = data.files.iter().map(|f| f.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["sidx.log", "sidx.log.1"]);
        let text = render_text(LogsView::Files, &data);
        assert!(text.contains("Filename"));
        assert!(text.contains("sidx.log.1"));
    }

    #[test]
    fn update_files_view_reads_update_subdirectory() {
        let dir = temp_dir("update");
        fs::create_dir_all(dir.join(UPDATE_LOG_DIR)).unwrap();
        fs::write(dir.join(UPDATE_LOG_DIR).join("update.log"), "u").unwrap();
        fs::write(dir.join("sidx.log"), "x").unwrap();

        let data = LogsData::load(LogsView::UpdateFiles, &dir.join("sidx.log"));

        assert_eq!(data.files.len(), 1);
        assert_eq!(data.files[0].name, "update.log");
    }

    #[test]
    fn missing_update_directory_renders_empty_message() {
        let dir = temp_dir("noupdate");
        let data = LogsData::load(LogsView::UpdateFiles, &dir.join("sidx.log"));

        assert!(data.files.is_empty());
        assert!(data.error.is_none());
        assert!(render_text(LogsView::UpdateFiles, &data).contains("No log files found"));
    }

    #[test]
    fn scroll_is_clamped_to_rows() {
        let mut data = LogsData {
            lines: vec!["a".into(), "b".into(), "c".into()],
            ..LogsData::default()
        };
        data.scroll_by(10, LogsView::Table);
        assert_eq!(data.scroll, 2);
        data.scroll_by(-10, LogsView::Table);
        assert_eq!(data.scroll, 0);
        data.scroll_by(1, LogsView::Files);
        assert_eq!(data.scroll, 0);
    }
}
