use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    prelude::Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::state::Action;
use crate::ui::components::row_count;
use crate::ui::layout::centered_rect_abs;
use crate::ui::style;

/// "Quiz Complete" dialog over the home screen; OK dismisses it.
pub struct QuizCompleteScreen;

impl ScreenWidget for QuizCompleteScreen {
    fn title(&self) -> &str { "Quiz Complete" }

    fn draw(&self, f: &mut Frame<'_>, size: Rect, ctx: &AppCtx) {
        let Some(report) = &ctx.state.report else { return };
        let lines = [report.topic_title.clone(), report.score_line()];

        let ok_label = "OK";
        let ok_spans = style::button_spans(ok_label, true); // single button, always selected

        let content_w = lines
            .iter()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0)
            .max(4 + ok_label.len()); // "< " + label + " >"

        let inner_width = u16::try_from(content_w).unwrap_or(u16::MAX).max(36);
        let inner_height = row_count(lines.len()).saturating_add(2); // lines + spacer + button
        let total_w = inner_width.saturating_add(4);
        let total_h = inner_height.saturating_add(3);

        let area = centered_rect_abs(total_w, total_h, size);
        let inner = area.inner(&Margin { horizontal: 2, vertical: 1 });

        let mut constraints = vec![Constraint::Length(1); lines.len()];
        constraints.push(Constraint::Length(1)); // spacer
        constraints.push(Constraint::Length(1)); // button

        let vchunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        f.render_widget(Clear, area);
        f.render_widget(Block::default().borders(Borders::ALL).title(self.title()), area);

        for (i, text) in lines.iter().enumerate() {
            let p = Paragraph::new(Line::from(vec![Span::raw(text.as_str())])).alignment(Alignment::Center);
            f.render_widget(p, vchunks[i]);
        }

        let buttons_line = Paragraph::new(Line::from(ok_spans)).alignment(Alignment::Center);
        f.render_widget(buttons_line, vchunks[vchunks.len() - 1]);
    }

    fn on_key(&mut self, k: KeyEvent, _ctx: &AppCtx) -> Transition {
        match k.code {
            KeyCode::Esc | KeyCode::Enter => Transition::Dispatch(Action::DismissReport),
            _ => Transition::Stay,
        }
    }
}
