use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    prelude::Frame,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::state::{Action, Screen};
use crate::ui::layout::centered_rect_abs;
use crate::ui::style::button_line;

/// Fallback for a router state that resolves to no view. Only offers a way home.
#[derive(Default)]
pub struct InvalidScreen;

impl InvalidScreen {
    fn message(ctx: &AppCtx) -> &'static str {
        match ctx.state.screen {
            Screen::Topic => "No topic selected.",
            Screen::Quiz => "No topic selected for quiz.",
            Screen::Home => "Invalid screen.",
        }
    }
}

impl ScreenWidget for InvalidScreen {
    fn draw(&self, f: &mut Frame<'_>, size: Rect, ctx: &AppCtx) {
        let area = centered_rect_abs(40, 7, size);
        let inner = area.inner(&Margin { horizontal: 2, vertical: 1 });
        let lines = vec![Line::from(Self::message(ctx)), Line::from(""), button_line("Go Home", true)];

        f.render_widget(Clear, area);
        f.render_widget(Block::default().borders(Borders::ALL), area);
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }

    fn on_key(&mut self, k: KeyEvent, _ctx: &AppCtx) -> Transition {
        match k.code {
            KeyCode::Enter | KeyCode::Esc => Transition::Dispatch(Action::GoHome),
            _ => Transition::Stay,
        }
    }
}
