//! Poster view options and their modal.

use crate::model::ViewMode;
use serde::Deserialize;

/// Poster cell size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosterSize {
    /// Compact cells.
    Small,
    /// Default cells.
    #[default]
    Medium,
    /// Wide cells.
    Large,
}

impl PosterSize {
    /// Cell width in terminal columns, borders included.
    pub fn cell_width(self) -> u16 {
        match self {
            PosterSize::Small => 16,
            PosterSize::Medium => 22,
            PosterSize::Large => 30,
        }
    }

    /// Cell height in terminal rows, borders included.
    pub fn cell_height(self) -> u16 {
        match self {
            PosterSize::Small => 5,
            PosterSize::Medium => 7,
            PosterSize::Large => 9,
        }
    }

    /// Label shown in the options modal.
    pub fn label(self) -> &'static str {
        match self {
            PosterSize::Small => "Small",
            PosterSize::Medium => "Medium",
            PosterSize::Large => "Large",
        }
    }

    /// Next size, wrapping from large to small.
    pub fn next(self) -> Self {
        match self {
            PosterSize::Small => PosterSize::Medium,
            PosterSize::Medium => PosterSize::Large,
            PosterSize::Large => PosterSize::Small,
        }
    }
}

/// Options applied to the poster grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosterOptions {
    /// Cell size.
    pub size: PosterSize,
    /// Whether titles are drawn under posters.
    pub show_title: bool,
}

impl Default for PosterOptions {
    fn default() -> Self {
        Self {
            size: PosterSize::default(),
            show_title: true,
        }
    }
}

/// Poster options modal: open flag plus the options it edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PosterOptionsModal {
    /// Whether the modal is showing.
    pub is_open: bool,
    /// Options being edited.
    pub options: PosterOptions,
}

impl PosterOptionsModal {
    /// Closed modal over `options`.
    pub fn new(options: PosterOptions) -> Self {
        Self {
            is_open: false,
            options,
        }
    }

    /// Open the modal. The poster options button only exists in the
    /// posters view, so this is refused elsewhere.
    pub fn open(&mut self, view: ViewMode) -> bool {
        if view != ViewMode::Posters {
            return false;
        }
        self.is_open = true;
        true
    }

    /// Close the modal.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Advance to the next poster size.
    pub fn cycle_size(&mut self) {
        self.options.size = self.options.size.next();
    }

    /// Show or hide poster titles.
    pub fn toggle_title(&mut self) {
        self.options.show_title = !self.options.show_title;
    }
}
