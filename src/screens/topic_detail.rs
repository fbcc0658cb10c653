use std::cell::Cell;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Frame,
    widgets::Paragraph,
};

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::screens::draw_page;
use crate::state::Action;
use crate::ui::common_nav::esc_to_back;
use crate::ui::components::{inner_text_width, row_count, wrapped_lines};
use crate::ui::help::help_topic;
use crate::ui::layout::Margins;
use crate::ui::style::button_line;

const START: usize = 0;
const BACK: usize = 1;
const SCROLL_STEP: u16 = 5;

/// Summary of the selected topic with "Start Questions" and "Back".
/// The summary scrolls with PgUp/PgDn; the buttons stay pinned below it.
#[derive(Default)]
pub struct TopicScreen {
    field_index: usize,
    summary_scroll: u16,
    // last offset the summary could scroll to, as of the latest draw
    max_scroll: Cell<u16>,
}

impl ScreenWidget for TopicScreen {
    fn draw(&self, f: &mut Frame<'_>, size: Rect, ctx: &AppCtx) {
        let Some(topic) = ctx.state.selected_topic() else { return };

        let width = inner_text_width(size.width, Margins::STANDARD.page, Margins::STANDARD.inner_middle);
        let summary = wrapped_lines(&topic.summary, width);
        let summary_rows = row_count(summary.len());

        let count = format!("{} question(s)", topic.questions.len());
        let regions = draw_page(f, size, &topic.title, &[count], summary_rows.saturating_add(3));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(2)])
            .split(regions.middle_inner);

        let max_scroll = summary_rows.saturating_sub(chunks[0].height);
        self.max_scroll.set(max_scroll);
        let scroll = self.summary_scroll.min(max_scroll);
        f.render_widget(Paragraph::new(summary).scroll((scroll, 0)), chunks[0]);

        let buttons = vec![
            button_line("Start Questions", self.field_index == START),
            button_line("← Back to Home", self.field_index == BACK),
        ];
        f.render_widget(Paragraph::new(buttons), chunks[2]);
        f.render_widget(help_topic(), regions.bottom);
    }

    fn on_key(&mut self, k: KeyEvent, _ctx: &AppCtx) -> Transition {
        if let Some(t) = esc_to_back(k) {
            return t;
        }
        match k.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                // two buttons: any movement toggles
                self.field_index = BACK - self.field_index;
                Transition::Stay
            }
            KeyCode::PageDown => {
                self.summary_scroll = self.summary_scroll.saturating_add(SCROLL_STEP).min(self.max_scroll.get());
                Transition::Stay
            }
            KeyCode::PageUp => {
                self.summary_scroll = self.summary_scroll.min(self.max_scroll.get()).saturating_sub(SCROLL_STEP);
                Transition::Stay
            }
            KeyCode::Enter if self.field_index == START => Transition::Dispatch(Action::StartQuiz),
            KeyCode::Enter => Transition::Dispatch(Action::Back),
            _ => Transition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testing::render;
    use crate::state::AppState;
    use crate::types::fixtures::basics_topic;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn topic_ctx() -> AppCtx {
        let mut ctx = AppCtx::with_state(AppState::new());
        ctx.dispatch(Action::TopicsLoaded(vec![basics_topic()]));
        ctx.dispatch(Action::PickTopic(0));
        ctx
    }

    #[test]
    fn shows_title_summary_and_actions() {
        let ctx = topic_ctx();
        let text = render(&TopicScreen::default(), &ctx, 80, 24);
        assert!(text.contains("Basics"));
        assert!(text.contains("Arithmetic and geography warm-up."));
        assert!(text.contains("2 question(s)"));
        assert!(text.contains("Start Questions"));
        assert!(text.contains("Back to Home"));
    }

    #[test]
    fn long_summary_scrolls_and_buttons_stay_visible() {
        let mut topic = basics_topic();
        topic.summary = (0..200).map(|i| format!("Word{i:03}")).collect::<Vec<_>>().join(" ");
        let mut ctx = AppCtx::with_state(AppState::new());
        ctx.dispatch(Action::TopicsLoaded(vec![topic]));
        ctx.dispatch(Action::PickTopic(0));

        // 60 columns wrap the summary to 6 words a row, far more rows than fit at height 24
        let mut screen = TopicScreen::default();
        let text = render(&screen, &ctx, 60, 24);
        assert!(text.contains("Word000"));
        assert!(!text.contains("Word199"));
        assert!(text.contains("Start Questions"));

        for _ in 0..10 {
            screen.on_key(key(KeyCode::PageDown), &ctx);
        }
        let text = render(&screen, &ctx, 60, 24);
        assert!(text.contains("Word199"));
        assert!(!text.contains("Word000"));
        assert!(text.contains("Start Questions"));
        assert!(text.contains("Back to Home"));

        for _ in 0..10 {
            screen.on_key(key(KeyCode::PageUp), &ctx);
        }
        assert!(render(&screen, &ctx, 60, 24).contains("Word000"));
    }

    #[test]
    fn enter_starts_quiz_by_default() {
        let ctx = topic_ctx();
        let mut screen = TopicScreen::default();
        assert!(matches!(screen.on_key(key(KeyCode::Enter), &ctx), Transition::Dispatch(Action::StartQuiz)));
    }

    #[test]
    fn back_button_and_esc_go_back() {
        let ctx = topic_ctx();
        let mut screen = TopicScreen::default();
        screen.on_key(key(KeyCode::Down), &ctx);
        assert!(matches!(screen.on_key(key(KeyCode::Enter), &ctx), Transition::Dispatch(Action::Back)));
        assert!(matches!(screen.on_key(key(KeyCode::Esc), &ctx), Transition::Dispatch(Action::Back)));
    }
}
