//! View selection: maps a [`ViewMode`] to the renderer that draws it.

use super::posters::SeriesPosters;
use super::table::SeriesTable;
use crate::model::{Series, ViewMode};
use crate::state::{JumpTarget, PosterOptions, ScrollMove, Scrollable};
use ratatui::{layout::Rect, Frame};

/// Which renderer draws the series list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererKind {
    /// [`SeriesTable`].
    Table,
    /// [`SeriesPosters`].
    Posters,
}

/// Pick the renderer for `mode`. Total: anything but posters is a table.
pub fn select(mode: ViewMode) -> RendererKind {
    match mode {
        ViewMode::Posters => RendererKind::Posters,
        ViewMode::Table => RendererKind::Table,
    }
}

/// Pick the renderer for a raw view token, absent or unknown meaning table.
pub fn select_token(token: Option<&str>) -> RendererKind {
    select(ViewMode::from_token_opt(token))
}

impl RendererKind {
    /// Build a fresh renderer of this kind.
    pub fn mount(self, options: PosterOptions) -> MountedRenderer {
        match self {
            RendererKind::Table => MountedRenderer::Table(SeriesTable::new()),
            RendererKind::Posters => MountedRenderer::Posters(SeriesPosters::new(options)),
        }
    }
}

/// The renderer currently drawing the index.
#[derive(Debug, Clone)]
pub enum MountedRenderer {
    /// Table view.
    Table(SeriesTable),
    /// Poster grid.
    Posters(SeriesPosters),
}

impl MountedRenderer {
    /// Kind of the mounted renderer.
    pub fn kind(&self) -> RendererKind {
        match self {
            MountedRenderer::Table(_) => RendererKind::Table,
            MountedRenderer::Posters(_) => RendererKind::Posters,
        }
    }

    /// Take the current visible series.
    pub fn sync(&mut self, items: &[Series]) {
        match self {
            MountedRenderer::Table(table) => table.sync(items),
            MountedRenderer::Posters(posters) => posters.sync(items),
        }
    }

    /// Apply poster options. Ignored by the table.
    pub fn set_poster_options(&mut self, options: PosterOptions) {
        if let MountedRenderer::Posters(posters) = self {
            posters.set_options(options);
        }
    }

    /// Move the selection.
    pub fn navigate(&mut self, movement: ScrollMove) {
        match self {
            MountedRenderer::Table(table) => table.navigate(movement),
            MountedRenderer::Posters(posters) => posters.navigate(movement),
        }
    }

    /// Selected row in the visible list.
    pub fn selected(&self) -> Option<usize> {
        match self {
            MountedRenderer::Table(table) => table.selected(),
            MountedRenderer::Posters(posters) => posters.selected(),
        }
    }

    /// Draw `items` into `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, items: &[Series], focused: bool) {
        match self {
            MountedRenderer::Table(table) => table.render(frame, area, items, focused),
            MountedRenderer::Posters(posters) => posters.render(frame, area, items, focused),
        }
    }
}

impl Scrollable for MountedRenderer {
    fn scroll_to_first_character(&mut self, target: JumpTarget) {
        match self {
            MountedRenderer::Table(table) => table.scroll_to_first_character(target),
            MountedRenderer::Posters(posters) => posters.scroll_to_first_character(target),
        }
    }
}
