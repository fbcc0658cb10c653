// style.rs
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::borrow::Cow;

pub fn span_key(s: &'static str) -> Span<'static> {
    Span::styled(s, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
}
pub fn span_sep() -> Span<'static> {
    Span::styled("  |  ", Style::default().fg(Color::DarkGray))
}
pub fn span_text(s: &'static str) -> Span<'static> {
    Span::raw(s)
}

/* ---------- Buttons (Blue brackets, Red for focused, Blue for idle) ---------- */

const ACCENT_BRACKET: Color = Color::Blue;
const SELECTED_TEXT: Color = Color::Red;
const IDLE_TEXT: Color = Color::Blue;

/* ---------- Quiz colors ---------- */

pub const CORRECT: Color = Color::Green;
pub const INCORRECT: Color = Color::Red;
/// Background of the choice the user locked in.
pub const PICKED_BG: Color = Color::Yellow;

/// Core painter: "< " + LABEL + " >"
pub fn button_spans<S: Into<Cow<'static, str>>>(label: S, selected: bool) -> Vec<Span<'static>> {
    let label = label.into();
    vec![
        Span::styled("< ", Style::default().fg(ACCENT_BRACKET).add_modifier(Modifier::BOLD)),
        Span::styled(
            label,
            Style::default()
                .fg(if selected { SELECTED_TEXT } else { IDLE_TEXT })
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" >", Style::default().fg(ACCENT_BRACKET).add_modifier(Modifier::BOLD)),
    ]
}

/// Convenience: a single Line you can pass to Paragraph/List/etc.
pub fn button_line<S: Into<Cow<'static, str>>>(label: S, selected: bool) -> Line<'static> {
    Line::from(button_spans(label, selected))
}

/// Feedback text colored by outcome.
pub fn feedback_line(text: &str, correct: bool) -> Line<'static> {
    let color = if correct { CORRECT } else { INCORRECT };
    Line::from(Span::styled(text.to_string(), Style::default().fg(color).add_modifier(Modifier::BOLD)))
}
