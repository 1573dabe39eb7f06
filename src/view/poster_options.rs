//! Poster options modal popup.

use super::constants::{POSTER_OPTIONS_HEIGHT, POSTER_OPTIONS_WIDTH};
use super::styles;
use crate::state::PosterOptions;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the poster options popup centered over `area`.
pub fn render_poster_options(frame: &mut Frame, area: Rect, options: PosterOptions) {
    let popup = centered_rect(POSTER_OPTIONS_WIDTH, POSTER_OPTIONS_HEIGHT, area);

    let checkbox = if options.show_title { "[x]" } else { "[ ]" };
    let lines = vec![
        Line::from(vec![
            Span::styled("[z] ", styles::KEY_HINT),
            Span::raw(format!("Poster Size: {}", options.size.label())),
        ]),
        Line::from(vec![
            Span::styled("[t] ", styles::KEY_HINT),
            Span::raw(format!("{checkbox} Show Title")),
        ]),
        Line::from(""),
        Line::styled("Esc to close", styles::DIM),
    ];

    let block = Block::default()
        .title(" Poster Options ")
        .borders(Borders::ALL)
        .border_style(styles::FOCUSED_BORDER);

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
