use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    prelude::Frame,
    text::Line,
    widgets::{List, ListItem, ListState},
};

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::screens::{draw_page, ConfirmQuitScreen};
use crate::state::Action;
use crate::ui::common_nav::cycle_focus;
use crate::ui::components::{list_row, row_count};
use crate::ui::help::help_home;

/// Topic list.
#[derive(Default)]
pub struct HomeScreen {
    list_index: usize,
}

impl ScreenWidget for HomeScreen {
    fn draw(&self, f: &mut Frame<'_>, size: Rect, ctx: &AppCtx) {
        let topics = &ctx.state.topics;
        let explanation = if topics.is_empty() {
            "No topics available.".to_string()
        } else {
            format!("{} topic(s). Pick one to read its summary.", topics.len())
        };

        let regions = draw_page(f, size, "Available Topics", &[explanation], row_count(topics.len()).saturating_add(1));

        let mut items: Vec<ListItem> = vec![ListItem::new(Line::from(""))];
        for (i, t) in topics.iter().enumerate() {
            items.push(ListItem::new(list_row(&t.title, self.list_index == i)));
        }
        // row 0 is the spacer; the list scrolls to keep the focused topic visible
        let selected = (!topics.is_empty()).then_some(self.list_index + 1);
        let mut list_state = ListState::default().with_selected(selected);
        f.render_stateful_widget(List::new(items), regions.middle_inner, &mut list_state);
        f.render_widget(help_home(), regions.bottom);
    }

    fn on_key(&mut self, k: KeyEvent, ctx: &AppCtx) -> Transition {
        let len = ctx.state.topics.len();
        match k.code {
            KeyCode::Esc => Transition::Push(Box::new(ConfirmQuitScreen::new())),
            KeyCode::Enter if len > 0 => Transition::Dispatch(Action::PickTopic(self.list_index.min(len - 1))),
            KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {
                self.list_index = cycle_focus(k, self.list_index, len);
                Transition::Stay
            }
            _ => Transition::Stay,
        }
    }
}
