//! Series index page layout.
//!
//! Toolbar on top, then the page body chosen by [`PageState`], then the
//! footer. The renderer, footer and jump bar only exist while loaded.

use super::constants::{FOOTER_HEIGHT, TOOLBAR_HEIGHT};
use super::footer::SeriesFooter;
use super::jump_bar::{jump_bar_width, render_jump_bar};
use super::poster_options::render_poster_options;
use super::selector::MountedRenderer;
use super::styles;
use super::toolbar::render_toolbar;
use crate::model::{InputError, LibraryStats, Series};
use crate::state::{AppState, IndexFocus, JumpTarget, PageState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything the index page reads during one draw.
pub struct IndexContext<'a> {
    /// UI state.
    pub state: &'a AppState,
    /// Which body to draw.
    pub page_state: PageState,
    /// Series after filter and sort, in display order.
    pub visible: &'a [Series],
    /// Jump targets for the visible series.
    pub targets: &'a [JumpTarget],
    /// Last fetch error, shown on the error page.
    pub error: Option<&'a InputError>,
    /// The library holds series even if the filter hides them all.
    pub library_has_items: bool,
}

/// Areas of the index page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexLayout {
    /// Toolbar row.
    pub toolbar: Rect,
    /// Renderer or state message.
    pub content: Rect,
    /// Jump bar column, when shown.
    pub jump_bar: Option<Rect>,
    /// Footer row, when shown.
    pub footer: Option<Rect>,
}

/// Split `area` into the index page regions. `jump_width` is `None`
/// when the jump bar is hidden.
pub fn index_layout(area: Rect, jump_width: Option<u16>, show_footer: bool) -> IndexLayout {
    let footer_height = if show_footer { FOOTER_HEIGHT } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TOOLBAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);

    let (content, jump_bar) = match jump_width {
        Some(width) => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0), Constraint::Length(width)])
                .split(rows[1]);
            (columns[0], Some(columns[1]))
        }
        None => (rows[1], None),
    };

    IndexLayout {
        toolbar: rows[0],
        content,
        jump_bar,
        footer: show_footer.then_some(rows[2]),
    }
}

/// Draw the index page for the current [`PageState`].
pub fn render_index(
    frame: &mut Frame,
    area: Rect,
    ctx: &IndexContext<'_>,
    renderer: &mut MountedRenderer,
) {
    let loaded = ctx.page_state.is_loaded();
    let jump_width = ctx
        .page_state
        .shows_jump_bar(ctx.targets.len())
        .then(|| jump_bar_width(ctx.targets));
    let layout = index_layout(area, jump_width, loaded);

    render_toolbar(frame, layout.toolbar, ctx.state);

    match ctx.page_state {
        PageState::Loading => render_message(frame, layout.content, vec![Line::from("Loading series…")]),
        PageState::Error => {
            let mut lines = vec![Line::styled("Unable to load series", styles::ERROR)];
            if let Some(error) = ctx.error {
                lines.push(Line::from(""));
                lines.push(Line::styled(error.to_string(), styles::DIM));
            }
            render_message(frame, layout.content, lines);
        }
        PageState::Empty => {
            let text = if ctx.library_has_items {
                "No series match the current filter"
            } else {
                "No series found"
            };
            render_message(frame, layout.content, vec![Line::from(text)]);
        }
        PageState::Loaded => {
            let content_focused = ctx.state.focus == IndexFocus::Content;
            renderer.render(frame, layout.content, ctx.visible, content_focused);
        }
    }

    if let Some(jump_area) = layout.jump_bar {
        render_jump_bar(
            frame,
            jump_area,
            ctx.targets,
            ctx.state.jump_bar_selected,
            ctx.state.focus == IndexFocus::JumpBar,
        );
    }

    if let Some(footer_area) = layout.footer {
        let stats = LibraryStats::from_series(ctx.visible);
        frame.render_widget(SeriesFooter::new(&stats), footer_area);
    }

    if ctx.state.poster_options.is_open {
        render_poster_options(frame, area, ctx.state.poster_options.options);
    }
}

fn render_message(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles::UNFOCUSED_BORDER),
        );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
