use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    prelude::Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::quiz::Phase;
use crate::screens::draw_page;
use crate::state::Action;
use crate::ui::common_nav::{cycle_focus, esc_to_back};
use crate::ui::components::{inner_text_width, row_count, scroll_to_show};
use crate::ui::help::help_quiz;
use crate::ui::layout::Margins;
use crate::ui::style::{self, button_line};

/// One question at a time. Choices lock after the first pick; Enter then
/// advances.
#[derive(Default)]
pub struct QuizScreen {
    cursor: usize,
}

impl QuizScreen {
    /// Rows for one choice, wrapped to `width`; the marker sits on the first row.
    fn choice_rows(choice: &str, width: usize, focused: bool, picked: bool, locked: bool) -> Vec<Line<'static>> {
        let marker = if focused && !locked { "▶ " } else { "  " };
        let style = if picked {
            Style::default().fg(Color::Black).bg(style::PICKED_BG).add_modifier(Modifier::BOLD)
        } else if locked {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        textwrap::wrap(choice, width.saturating_sub(2).max(1))
            .into_iter()
            .enumerate()
            .map(|(i, seg)| {
                let lead = if i == 0 { marker } else { "  " };
                Line::from(vec![
                    Span::styled(lead, Style::default().fg(Color::Cyan)),
                    Span::styled(seg.into_owned(), style),
                ])
            })
            .collect()
    }
}

impl ScreenWidget for QuizScreen {
    fn draw(&self, f: &mut Frame<'_>, size: Rect, ctx: &AppCtx) {
        let state = &ctx.state;
        let (Some(topic), Some(question)) = (state.selected_topic(), state.current_question()) else {
            return;
        };
        let session = &state.session;
        let locked = session.phase() != Phase::AwaitingSelection;

        let progress = format!(
            "Question {} of {} · Score {}",
            session.current_index() + 1,
            topic.questions.len(),
            session.score()
        );
        let paragraphs = [question.question.clone(), progress];

        let width = inner_text_width(size.width, Margins::STANDARD.page, Margins::STANDARD.inner_middle);
        let mut rows: Vec<Line> = Vec::new();
        let mut focus_row = 0;
        for (i, choice) in state.shuffled_choices.iter().enumerate() {
            let picked = session.selected_choice() == Some(choice.as_str());
            let focused = self.cursor == i;
            if focused {
                focus_row = rows.len();
            }
            rows.extend(Self::choice_rows(choice, width, focused, picked, locked));
        }
        if locked {
            let correct = session.selected_choice().is_some_and(|c| question.is_correct(c));
            rows.push(Line::from(""));
            rows.extend(
                textwrap::wrap(session.feedback(), width.max(1))
                    .into_iter()
                    .map(|seg| style::feedback_line(&seg, correct)),
            );
            rows.push(Line::from(""));
            rows.push(button_line("Next", true));
            focus_row = rows.len() - 1;
        }

        let regions = draw_page(f, size, &topic.title, &paragraphs, row_count(rows.len()));
        let scroll = scroll_to_show(focus_row, regions.middle_inner.height);
        f.render_widget(Paragraph::new(rows).scroll((scroll, 0)), regions.middle_inner);
        f.render_widget(help_quiz(locked), regions.bottom);
    }

    fn on_key(&mut self, k: KeyEvent, ctx: &AppCtx) -> Transition {
        if let Some(t) = esc_to_back(k) {
            return t;
        }
        let choices = &ctx.state.shuffled_choices;

        match ctx.state.session.phase() {
            Phase::AwaitingSelection => match k.code {
                KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {
                    self.cursor = cycle_focus(k, self.cursor, choices.len());
                    Transition::Stay
                }
                KeyCode::Enter => match choices.get(self.cursor) {
                    Some(c) => Transition::Dispatch(Action::SelectChoice(c.clone())),
                    None => Transition::Stay,
                },
                // 1-9 picks directly
                KeyCode::Char(c @ '1'..='9') => {
                    let idx = (c as usize) - ('1' as usize);
                    match choices.get(idx) {
                        Some(choice) => {
                            self.cursor = idx;
                            Transition::Dispatch(Action::SelectChoice(choice.clone()))
                        }
                        None => Transition::Stay,
                    }
                }
                _ => Transition::Stay,
            },
            Phase::Answered => match k.code {
                KeyCode::Enter | KeyCode::Char('n' | 'N') => {
                    self.cursor = 0;
                    Transition::Dispatch(Action::Advance)
                }
                _ => Transition::Stay,
            },
            Phase::Complete => Transition::Stay,
        }
    }
}
