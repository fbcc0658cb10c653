use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use textwrap::wrap;

/// List row with a "▶ " marker when focused.
pub fn list_row(label: &str, focused: bool) -> Line<'static> {
    let prefix = if focused { "▶ " } else { "  " };
    Line::from(vec![
        Span::styled(prefix, Style::default().fg(Color::Cyan)),
        Span::raw(label.to_string()),
    ])
}

/// Hard-wraps `text` to `width` columns, one `Line` per row.
pub fn wrapped_lines(text: &str, width: usize) -> Vec<Line<'static>> {
    wrap(text, width.max(1)).into_iter().map(|seg| Line::from(seg.into_owned())).collect()
}

/// Inner width left for text once page margin, borders and inner margin are taken.
pub fn inner_text_width(total: u16, page_margin: u16, inner_margin: u16) -> usize {
    total.saturating_sub(2 * page_margin + 2 + 2 * inner_margin) as usize
}

/// Row count as a terminal height, saturating at `u16::MAX`.
pub fn row_count(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Scroll offset that keeps `row` inside a viewport `height` rows tall.
pub fn scroll_to_show(row: usize, height: u16) -> u16 {
    row_count((row + 1).saturating_sub(usize::from(height.max(1))))
}
