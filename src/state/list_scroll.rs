//! Selection and scroll bookkeeping shared by the table and poster views.
//!
//! Items are laid out in rows of `columns` cells (1 for the table). The
//! state tracks the selected item index and the first visible row.
//! Callers clamp whenever the item count changes and call
//! [`ListScroll::ensure_visible`] once the viewport height is known.

/// A selection movement requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMove {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One cell left.
    Left,
    /// One cell right.
    Right,
    /// One page up.
    PageUp,
    /// One page down.
    PageDown,
    /// First item.
    Top,
    /// Last item.
    Bottom,
}

/// Selection and first-visible-row state for a (possibly gridded) list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListScroll {
    /// Selected item, or `None` when the list is empty.
    pub selected: Option<usize>,
    /// First visible row (not item).
    pub offset_row: usize,
}

impl ListScroll {
    /// Nothing selected, scrolled to the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp selection to `len` items. An empty list clears everything.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            *self = Self::default();
            return;
        }
        self.selected = Some(self.selected.unwrap_or(0).min(len - 1));
    }

    /// Move selection by `delta` items, saturating at both ends.
    pub fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            *self = Self::default();
            return;
        }
        let current = self.selected.unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.selected = Some(next as usize);
    }

    /// Select the first of `len` items and scroll to the top.
    pub fn select_first(&mut self, len: usize) {
        self.selected = (len > 0).then_some(0);
        self.offset_row = 0;
    }

    /// Select the last of `len` items.
    pub fn select_last(&mut self, len: usize) {
        self.selected = len.checked_sub(1);
    }

    /// Apply a movement on a grid of `columns` cells per row with
    /// `page_rows` rows per page. Up/Down move a whole row.
    pub fn apply(&mut self, movement: ScrollMove, len: usize, columns: usize, page_rows: usize) {
        let columns = columns.max(1) as isize;
        let page = (page_rows.max(1) as isize) * columns;
        match movement {
            ScrollMove::Up => self.move_by(-columns, len),
            ScrollMove::Down => self.move_by(columns, len),
            ScrollMove::Left => self.move_by(-1, len),
            ScrollMove::Right => self.move_by(1, len),
            ScrollMove::PageUp => self.move_by(-page, len),
            ScrollMove::PageDown => self.move_by(page, len),
            ScrollMove::Top => self.select_first(len),
            ScrollMove::Bottom => self.select_last(len),
        }
    }

    /// Select `index` and make its row the first visible row.
    pub fn jump_to(&mut self, index: usize, columns: usize) {
        self.selected = Some(index);
        self.offset_row = index / columns.max(1);
    }

    /// Adjust `offset_row` so the selected item is inside a viewport of
    /// `visible_rows` rows, and so the viewport does not run past the
    /// last row when it could show more.
    pub fn ensure_visible(&mut self, len: usize, columns: usize, visible_rows: usize) {
        let columns = columns.max(1);
        let total_rows = len.div_ceil(columns);
        let visible_rows = visible_rows.max(1);

        let max_offset = total_rows.saturating_sub(visible_rows);
        self.offset_row = self.offset_row.min(max_offset);

        if let Some(selected) = self.selected {
            let row = selected / columns;
            if row < self.offset_row {
                self.offset_row = row;
            } else if row >= self.offset_row + visible_rows {
                self.offset_row = row + 1 - visible_rows;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_empty_resets() {
        let mut scroll = ListScroll {
            selected: Some(4),
            offset_row: 2,
        };
        scroll.clamp(0);
        assert_eq!(scroll, ListScroll::default());
    }

    #[test]
    fn clamp_pulls_selection_into_range() {
        let mut scroll = ListScroll {
            selected: Some(9),
            offset_row: 0,
        };
        scroll.clamp(3);
        assert_eq!(scroll.selected, Some(2));
    }

    #[test]
    fn move_by_saturates() {
        let mut scroll = ListScroll::new();
        scroll.move_by(-1, 5);
        assert_eq!(scroll.selected, Some(0));
        scroll.move_by(100, 5);
        assert_eq!(scroll.selected, Some(4));
    }

    #[test]
    fn jump_to_places_row_at_top() {
        let mut scroll = ListScroll::new();
        scroll.jump_to(7, 3);
        assert_eq!(scroll.selected, Some(7));
        assert_eq!(scroll.offset_row, 2);
    }

    #[test]
    fn ensure_visible_scrolls_down_to_selection() {
        let mut scroll = ListScroll {
            selected: Some(9),
            offset_row: 0,
        };
        scroll.ensure_visible(20, 1, 5);
        assert_eq!(scroll.offset_row, 5);
    }

    #[test]
    fn ensure_visible_scrolls_up_to_selection() {
        let mut scroll = ListScroll {
            selected: Some(1),
            offset_row: 6,
        };
        scroll.ensure_visible(20, 1, 5);
        assert_eq!(scroll.offset_row, 1);
    }

    #[test]
    fn ensure_visible_does_not_leave_blank_tail() {
        // Jumping to the last item puts it at the top; the viewport is
        // pulled back so it stays full.
        let mut scroll = ListScroll::new();
        scroll.jump_to(19, 1);
        scroll.ensure_visible(20, 1, 5);
        assert_eq!(scroll.offset_row, 15);
        assert_eq!(scroll.selected, Some(19));
    }

    #[test]
    fn apply_moves_rows_in_grid() {
        let mut scroll = ListScroll::new();
        scroll.clamp(10);
        scroll.apply(ScrollMove::Down, 10, 4, 2);
        assert_eq!(scroll.selected, Some(4));
        scroll.apply(ScrollMove::Right, 10, 4, 2);
        assert_eq!(scroll.selected, Some(5));
        scroll.apply(ScrollMove::PageDown, 10, 4, 2);
        assert_eq!(scroll.selected, Some(9));
        scroll.apply(ScrollMove::Top, 10, 4, 2);
        assert_eq!(scroll, ListScroll { selected: Some(0), offset_row: 0 });
    }

    #[test]
    fn select_last_on_empty_is_none() {
        let mut scroll = ListScroll::new();
        scroll.select_last(0);
        assert_eq!(scroll.selected, None);
    }
}
