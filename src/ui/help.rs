use ratatui::{
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::style::{span_key, span_sep, span_text};

fn bar<'a>(line: Line<'a>) -> Paragraph<'a> {
    Paragraph::new(line).block(Block::default().borders(Borders::ALL)).wrap(Wrap { trim: true })
}

pub fn help_home<'a>() -> Paragraph<'a> {
    bar(Line::from(vec![
        span_key("↑/↓/Tab"), span_text(" Navigate"), span_sep(),
        span_key("Enter"), span_text(" Open topic"), span_sep(),
        span_key("Ctrl+Q"), span_text(" Quit"),
    ]))
}

pub fn help_topic<'a>() -> Paragraph<'a> {
    bar(Line::from(vec![
        span_key("↑/↓/Tab"), span_text(" Move"), span_sep(),
        span_key("Enter"), span_text(" Select"), span_sep(),
        span_key("PgUp/PgDn"), span_text(" Scroll"), span_sep(),
        span_key("Esc"), span_text(" Back"), span_sep(),
        span_key("Ctrl+Q"), span_text(" Quit"),
    ]))
}

pub fn help_quiz<'a>(answered: bool) -> Paragraph<'a> {
    let action = if answered { " Next" } else { " Answer" };
    bar(Line::from(vec![
        span_key("↑/↓/Tab"), span_text(" Move"), span_sep(),
        span_key("Enter"), span_text(action), span_sep(),
        span_key("Esc"), span_text(" Topic detail"), span_sep(),
        span_key("Ctrl+Q"), span_text(" Quit"),
    ]))
}
