//! Poster grid renderer for the series index.
//!
//! Series are laid out left to right in cells sized by [`PosterSize`].
//! No artwork is drawn; each cell shows the title (optional), year and
//! network.

use super::styles;
use super::table::truncate_to_width;
use crate::model::Series;
use crate::state::{
    BucketIndex, JumpTarget, ListScroll, PosterOptions, PosterSize, ScrollMove, Scrollable,
};
use ratatui::{
    layout::Rect,
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Grid view of the visible series.
#[derive(Debug, Clone)]
pub struct SeriesPosters {
    scroll: ListScroll,
    buckets: BucketIndex,
    options: PosterOptions,
    columns: usize,
    page_rows: usize,
}

impl SeriesPosters {
    /// Empty grid drawn with `options`.
    pub fn new(options: PosterOptions) -> Self {
        Self {
            scroll: ListScroll::new(),
            buckets: BucketIndex::default(),
            options,
            columns: 1,
            page_rows: 1,
        }
    }

    /// Take the current visible series. Call whenever the list changes.
    pub fn sync(&mut self, items: &[Series]) {
        self.buckets = BucketIndex::from_series(items);
        self.scroll.clamp(self.buckets.len());
    }

    /// Replace the cell options.
    pub fn set_options(&mut self, options: PosterOptions) {
        self.options = options;
    }

    /// Selected item, or `None` when the list is empty.
    pub fn selected(&self) -> Option<usize> {
        self.scroll.selected
    }

    /// First visible grid row.
    pub fn offset_row(&self) -> usize {
        self.scroll.offset_row
    }

    /// Cells per row at the last render.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Move the selection across the grid.
    pub fn navigate(&mut self, movement: ScrollMove) {
        self.scroll
            .apply(movement, self.buckets.len(), self.columns, self.page_rows);
    }

    /// Lay out cells for `area` and draw the visible rows.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, items: &[Series], focused: bool) {
        let border = if focused {
            styles::FOCUSED_BORDER
        } else {
            styles::UNFOCUSED_BORDER
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" Series ({}) ", items.len()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let size = self.options.size;
        let (columns, rows) = grid_dimensions(inner, size);
        self.columns = columns;
        self.page_rows = rows;

        self.scroll.clamp(items.len());
        self.scroll.ensure_visible(items.len(), columns, rows);

        let first = self.scroll.offset_row * columns;
        for (slot, (index, series)) in items
            .iter()
            .enumerate()
            .skip(first)
            .take(columns * rows)
            .enumerate()
        {
            let cell = Rect {
                x: inner.x + (slot % columns) as u16 * size.cell_width(),
                y: inner.y + (slot / columns) as u16 * size.cell_height(),
                width: size.cell_width(),
                height: size.cell_height(),
            }
            .intersection(inner);

            let selected = self.scroll.selected == Some(index);
            self.render_cell(frame, cell, series, selected);
        }
    }

    fn render_cell(&self, frame: &mut Frame, cell: Rect, series: &Series, selected: bool) {
        let border = if selected {
            styles::SELECTED_BORDER
        } else if series.monitored {
            styles::UNFOCUSED_BORDER
        } else {
            styles::UNMONITORED
        };
        let block = Block::default().borders(Borders::ALL).border_style(border);
        let text_width = cell.width.saturating_sub(2) as usize;

        let mut lines = Vec::new();
        if self.options.show_title {
            lines.push(Line::from(truncate_to_width(&series.title, text_width)));
        }
        let year = series.year.map(|y| y.to_string()).unwrap_or_default();
        lines.push(Line::styled(year, styles::DIM));
        if let Some(network) = &series.network {
            lines.push(Line::styled(truncate_to_width(network, text_width), styles::DIM));
        }

        frame.render_widget(Paragraph::new(Text::from(lines)).block(block), cell);
    }
}

/// Columns and rows of whole cells that fit in `inner`, at least one each.
pub fn grid_dimensions(inner: Rect, size: PosterSize) -> (usize, usize) {
    let columns = (inner.width / size.cell_width()).max(1) as usize;
    let rows = (inner.height / size.cell_height()).max(1) as usize;
    (columns, rows)
}

impl Scrollable for SeriesPosters {
    fn scroll_to_first_character(&mut self, target: JumpTarget) {
        if let Some(index) = self.buckets.first_index(target) {
            self.scroll.jump_to(index, self.columns);
        }
    }
}
