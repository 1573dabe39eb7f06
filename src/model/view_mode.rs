//! View mode for the series index.

use std::fmt;

/// Visual layout used to render the series collection.
///
/// `Table` is the default and the fallback for any token other than
/// `"posters"`, so an unknown or missing value never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// One row per series with sortable columns.
    #[default]
    Table,
    /// Grid of poster cells.
    Posters,
}

impl ViewMode {
    /// Token for [`ViewMode::Table`].
    pub const TABLE_TOKEN: &'static str = "table";
    /// Token for [`ViewMode::Posters`].
    pub const POSTERS_TOKEN: &'static str = "posters";

    /// Map a view token to a mode. Only `"posters"` selects posters.
    pub fn from_token(token: &str) -> Self {
        if token == Self::POSTERS_TOKEN {
            ViewMode::Posters
        } else {
            ViewMode::Table
        }
    }

    /// Like [`ViewMode::from_token`], treating an absent token as `Table`.
    pub fn from_token_opt(token: Option<&str>) -> Self {
        token.map(Self::from_token).unwrap_or_default()
    }

    /// Token for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Table => Self::TABLE_TOKEN,
            ViewMode::Posters => Self::POSTERS_TOKEN,
        }
    }

    /// Label shown in the view menu.
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Table => "Table",
            ViewMode::Posters => "Posters",
        }
    }

    /// Next entry in the view menu.
    pub fn next(self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Posters,
            ViewMode::Posters => ViewMode::Table,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posters_token_selects_posters() {
        assert_eq!(ViewMode::from_token("posters"), ViewMode::Posters);
    }

    #[test]
    fn every_other_token_falls_back_to_table() {
        for token in ["table", "", "bogus", "Posters", "POSTERS", " posters"] {
            assert_eq!(ViewMode::from_token(token), ViewMode::Table, "token {token:?}");
        }
        assert_eq!(ViewMode::from_token_opt(None), ViewMode::Table);
    }

    #[test]
    fn tokens_round_trip_through_as_str() {
        for mode in [ViewMode::Table, ViewMode::Posters] {
            assert_eq!(ViewMode::from_token(mode.as_str()), mode);
        }
    }

    #[test]
    fn next_alternates() {
        assert_eq!(ViewMode::Table.next(), ViewMode::Posters);
        assert_eq!(ViewMode::Posters.next(), ViewMode::Table);
    }
}
