use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    prelude::Frame,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::ui::layout::centered_rect_abs;

/// Shown until the single topics load settles.
pub struct LoadingScreen;

impl ScreenWidget for LoadingScreen {
    fn draw(&self, f: &mut Frame<'_>, size: Rect, _ctx: &AppCtx) {
        let area = centered_rect_abs(36, 5, size);
        let p = Paragraph::new("\nLoading topics...")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(self.title()));
        f.render_widget(p, area);
    }

    fn on_key(&mut self, _k: KeyEvent, _ctx: &AppCtx) -> Transition {
        Transition::Stay
    }
}
