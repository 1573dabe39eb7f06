//! Series index footer with library totals.

use super::styles;
use crate::model::stats::format_bytes;
use crate::model::LibraryStats;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Footer widget showing [`LibraryStats`] for the listed series.
pub struct SeriesFooter<'a> {
    stats: &'a LibraryStats,
}

impl<'a> SeriesFooter<'a> {
    /// Footer over `stats`.
    pub fn new(stats: &'a LibraryStats) -> Self {
        Self { stats }
    }
}

impl Widget for SeriesFooter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles::UNFOCUSED_BORDER);
        let inner = block.inner(area);
        block.render(area, buf);

        let s = self.stats;
        let fields = [
            ("Series", s.series.to_string()),
            ("Monitored", s.monitored.to_string()),
            ("Unmonitored", s.unmonitored.to_string()),
            ("Continuing", s.continuing.to_string()),
            ("Ended", s.ended.to_string()),
            ("Episodes", s.episodes.to_string()),
            ("Files", s.episode_files.to_string()),
            ("Total Size", format_bytes(s.size_on_disk)),
        ];

        let mut spans = Vec::with_capacity(fields.len() * 2);
        for (label, value) in fields {
            spans.push(Span::styled(format!("{label}: "), styles::DIM));
            spans.push(Span::raw(format!("{value}  ")));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
