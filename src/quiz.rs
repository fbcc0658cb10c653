//! Per-topic quiz progress: current question, locked choice, feedback and score.

use crate::defaults::Defaults;
use crate::types::{Question, Topic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    Answered,
    Complete,
}

/// Final tally handed back to the router when the last question is passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReport {
    pub topic_title: String,
    pub score: u32,
    pub total: usize,
}

impl QuizReport {
    pub fn score_line(&self) -> String {
        format!("Your score: {}/{}", self.score, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    current_index: usize,
    selected_choice: Option<String>,
    feedback: String,
    score: u32,
    complete: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::start()
    }
}

impl Session {
    /// Fresh session positioned on the first question.
    pub fn start() -> Self {
        Self {
            current_index: 0,
            selected_choice: None,
            feedback: String::new(),
            score: 0,
            complete: false,
        }
    }

    pub fn current_index(&self) -> usize { self.current_index }
    pub fn selected_choice(&self) -> Option<&str> { self.selected_choice.as_deref() }
    pub fn feedback(&self) -> &str { &self.feedback }
    pub fn score(&self) -> u32 { self.score }

    pub fn phase(&self) -> Phase {
        if self.complete {
            Phase::Complete
        } else if self.selected_choice.is_some() {
            Phase::Answered
        } else {
            Phase::AwaitingSelection
        }
    }

    pub fn current_question<'t>(&self, topic: &'t Topic) -> Option<&'t Question> {
        topic.questions.get(self.current_index)
    }

    /// Locks `option` as the answer for the current question.
    ///
    /// Returns `false` (and changes nothing) unless the session is awaiting a
    /// selection and `option` is one of the question's choices.
    pub fn select_choice(&mut self, topic: &Topic, option: &str) -> bool {
        if self.phase() != Phase::AwaitingSelection {
            return false;
        }
        let Some(question) = self.current_question(topic) else {
            return false;
        };
        if !question.choices.iter().any(|c| c == option) {
            return false;
        }

        if question.is_correct(option) {
            self.feedback = Defaults::CORRECT_FEEDBACK.to_string();
            self.score += 1;
        } else {
            self.feedback = format!("{} {}", Defaults::INCORRECT_PREFIX, question.explanation);
        }
        self.selected_choice = Some(option.to_string());
        true
    }

    /// Moves past an answered question.
    ///
    /// Returns the report when that was the last question; the session is then
    /// `Complete` and ignores further input.
    pub fn advance(&mut self, topic: &Topic) -> Option<QuizReport> {
        if self.phase() != Phase::Answered {
            return None;
        }

        if self.current_index + 1 < topic.questions.len() {
            self.current_index += 1;
            self.selected_choice = None;
            self.feedback.clear();
            None
        } else {
            self.complete = true;
            Some(QuizReport {
                topic_title: topic.title.clone(),
                score: self.score,
                total: topic.questions.len(),
            })
        }
    }
}
