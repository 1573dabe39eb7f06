//! Table renderer for the series index.
//!
//! One row per series. The selected row is highlighted and kept inside
//! the viewport; a jump puts the first series of the bucket at the top.

use super::constants::TABLE_CHROME_ROWS;
use super::styles;
use crate::model::stats::format_bytes;
use crate::model::Series;
use crate::state::{BucketIndex, JumpTarget, ListScroll, ScrollMove, Scrollable};
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::Text,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Table view of the visible series.
#[derive(Debug, Clone, Default)]
pub struct SeriesTable {
    scroll: ListScroll,
    buckets: BucketIndex,
    page_rows: usize,
}

impl SeriesTable {
    /// Empty table with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the current visible series. Call whenever the list changes.
    pub fn sync(&mut self, items: &[Series]) {
        self.buckets = BucketIndex::from_series(items);
        self.scroll.clamp(self.buckets.len());
    }

    /// Selected row, or `None` when the list is empty.
    pub fn selected(&self) -> Option<usize> {
        self.scroll.selected
    }

    /// First visible row.
    pub fn offset(&self) -> usize {
        self.scroll.offset_row
    }

    /// Move the selection one step.
    pub fn navigate(&mut self, movement: ScrollMove) {
        self.scroll
            .apply(movement, self.buckets.len(), 1, self.page_rows.max(1));
    }

    /// Draw the visible window of `items`, keeping the selection in view.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, items: &[Series], focused: bool) {
        let visible_rows = area.height.saturating_sub(TABLE_CHROME_ROWS) as usize;
        self.page_rows = visible_rows.max(1);
        self.scroll.clamp(items.len());
        self.scroll.ensure_visible(items.len(), 1, self.page_rows);

        let start = self.scroll.offset_row.min(items.len());
        let end = (start + self.page_rows).min(items.len());

        let rows: Vec<Row> = items[start..end].iter().map(series_row).collect();

        let header = Row::new(["Status", "Title", "Network", "Seasons", "Episodes", "Size", "Year"])
            .style(styles::HEADER);

        let border = if focused {
            styles::FOCUSED_BORDER
        } else {
            styles::UNFOCUSED_BORDER
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(11),
                Constraint::Fill(1),
                Constraint::Length(12),
                Constraint::Length(7),
                Constraint::Length(9),
                Constraint::Length(10),
                Constraint::Length(4),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" Series ({}) ", items.len())),
        )
        .row_highlight_style(styles::SELECTED);

        let mut table_state = TableState::default()
            .with_selected(self.scroll.selected.and_then(|s| s.checked_sub(start)));

        frame.render_stateful_widget(table, area, &mut table_state);
    }
}

fn series_row(series: &Series) -> Row<'_> {
    let style = if series.monitored {
        Style::default()
    } else {
        styles::UNMONITORED
    };

    Row::new(vec![
        Cell::from(series.status.label()),
        Cell::from(Text::from(series.title.as_str())),
        Cell::from(series.network.as_deref().unwrap_or("-")),
        Cell::from(series.season_count.to_string()),
        Cell::from(format!("{}/{}", series.episode_file_count, series.episode_count)),
        Cell::from(format_bytes(series.size_on_disk)),
        Cell::from(series.year.map(|y| y.to_string()).unwrap_or_default()),
    ])
    .style(style)
}

/// Truncate `text` to `width` display columns, ending with `…` when cut.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

impl Scrollable for SeriesTable {
    fn scroll_to_first_character(&mut self, target: JumpTarget) {
        if let Some(index) = self.buckets.first_index(target) {
            self.scroll.jump_to(index, 1);
        }
    }
}
