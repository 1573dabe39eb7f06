//! Jump bar widget.
//!
//! A narrow vertical column with one entry per jump target, in the
//! order the targets were computed (already reversed for descending
//! sorts).

use super::constants::JUMP_BAR_MIN_WIDTH;
use super::styles;
use crate::state::JumpTarget;
use ratatui::{
    layout::Rect,
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Render the jump bar.
///
/// # Arguments
/// * `targets` - Jump targets in display order
/// * `selected` - Highlighted entry, shown only while the bar has focus
/// * `focused` - Whether keyboard focus is on the bar
///
/// # Behavior
/// - When there are more targets than rows, the window scrolls so the
///   selected entry stays visible
/// - Out-of-bounds selections highlight nothing
pub fn render_jump_bar(
    frame: &mut Frame,
    area: Rect,
    targets: &[JumpTarget],
    selected: usize,
    focused: bool,
) {
    let border = if focused {
        styles::FOCUSED_BORDER
    } else {
        styles::UNFOCUSED_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border);
    let rows = block.inner(area).height as usize;

    let start = window_start(targets.len(), selected, rows);
    let lines: Vec<Line> = targets
        .iter()
        .enumerate()
        .skip(start)
        .take(rows)
        .map(|(index, target)| {
            let line = Line::from(target.to_string()).centered();
            if focused && index == selected {
                line.style(styles::SELECTED)
            } else {
                line
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

/// Column width that fits the widest target between the borders.
pub fn jump_bar_width(targets: &[JumpTarget]) -> u16 {
    let inner = targets
        .iter()
        .filter_map(|target| target.as_char().width())
        .max()
        .unwrap_or(1)
        .max(1);
    let inner = u16::try_from(inner).unwrap_or(1);
    inner.saturating_add(2).max(JUMP_BAR_MIN_WIDTH)
}

/// First entry shown so `selected` fits in `rows` rows.
pub fn window_start(len: usize, selected: usize, rows: usize) -> usize {
    if rows == 0 || len <= rows {
        return 0;
    }
    let selected = selected.min(len - 1);
    (selected + 1).saturating_sub(rows).min(len - rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn targets(chars: &str) -> Vec<JumpTarget> {
        chars.chars().map(JumpTarget::new).collect()
    }

    fn column_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn renders_every_target_when_it_fits() {
        let mut terminal = Terminal::new(TestBackend::new(3, 8)).unwrap();
        let list = targets("#AMb");

        terminal
            .draw(|frame| render_jump_bar(frame, frame.area(), &list, 0, false))
            .unwrap();

        let text = column_text(&terminal);
        for c in ['#', 'A', 'M', 'b'] {
            assert!(text.contains(c), "missing {c}");
        }
    }

    #[test]
    fn selected_entry_is_highlighted_when_focused() {
        let mut terminal = Terminal::new(TestBackend::new(3, 6)).unwrap();
        let list = targets("ABC");

        terminal
            .draw(|frame| render_jump_bar(frame, frame.area(), &list, 1, true))
            .unwrap();

        // Row 0 is the border; B is on row 2.
        let cell = &terminal.backend().buffer()[(1, 2)];
        assert_eq!(cell.symbol(), "B");
        assert_eq!(cell.bg, ratatui::style::Color::Yellow);
    }

    #[test]
    fn width_grows_for_wide_targets() {
        assert_eq!(jump_bar_width(&[]), JUMP_BAR_MIN_WIDTH);
        assert_eq!(jump_bar_width(&targets("#Ab")), 3);
        assert_eq!(jump_bar_width(&targets("A進")), 4);
        // Zero-width and control characters still get one column.
        assert_eq!(jump_bar_width(&targets("\u{301}")), 3);
    }

    #[test]
    fn wide_target_renders_in_sized_column() {
        let list = targets("A進");
        let width = jump_bar_width(&list);
        let mut terminal = Terminal::new(TestBackend::new(width, 5)).unwrap();

        terminal
            .draw(|frame| render_jump_bar(frame, frame.area(), &list, 1, true))
            .unwrap();

        let cell = &terminal.backend().buffer()[(1, 2)];
        assert_eq!(cell.symbol(), "進");
        assert_eq!(cell.bg, ratatui::style::Color::Yellow);
    }

    #[test]
    fn window_start_keeps_selection_visible() {
        assert_eq!(window_start(5, 4, 10), 0);
        assert_eq!(window_start(26, 0, 5), 0);
        assert_eq!(window_start(26, 7, 5), 3);
        assert_eq!(window_start(26, 25, 5), 21);
        assert_eq!(window_start(26, 99, 5), 21);
        assert_eq!(window_start(26, 3, 0), 0);
    }
}
