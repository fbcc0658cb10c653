//! Whole-app UI state as one value plus a pure transition function.
//!
//! Every user event and the load completion become an [`Action`]; the event
//! loop replaces its `AppState` with `state.reduce(action, rng)`. Router,
//! session and display state change together, so a quiz screen can never be
//! shown with another topic's session or a stale choice order.

use rand::Rng;

use crate::quiz::{QuizReport, Session};
use crate::shuffle::shuffle_choices;
use crate::types::{Question, Topic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Topic,
    Quiz,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The single load attempt finished (empty on failure).
    TopicsLoaded(Vec<Topic>),
    PickTopic(usize),
    StartQuiz,
    SelectChoice(String),
    Advance,
    Back,
    GoHome,
    DismissReport,
}

/// What the event loop should render for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Loading,
    Home,
    TopicDetail,
    Quiz,
    /// Router and selection disagree; only a way home is offered.
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub loading: bool,
    pub topics: Vec<Topic>,
    pub screen: Screen,
    pub selected_topic: Option<usize>,
    pub session: Session,
    pub shuffled_choices: Vec<String>,
    pub report: Option<QuizReport>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            topics: Vec::new(),
            screen: Screen::Home,
            selected_topic: None,
            session: Session::start(),
            shuffled_choices: Vec::new(),
            report: None,
        }
    }

    pub fn selected_topic(&self) -> Option<&Topic> {
        self.selected_topic.and_then(|i| self.topics.get(i))
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.selected_topic().and_then(|t| self.session.current_question(t))
    }

    pub fn view(&self) -> View {
        if self.loading {
            return View::Loading;
        }
        match self.screen {
            Screen::Home => View::Home,
            Screen::Topic if self.selected_topic().is_some() => View::TopicDetail,
            Screen::Quiz if self.current_question().is_some() => View::Quiz,
            _ => View::Invalid,
        }
    }

    fn shuffle_key(&self) -> (Screen, Option<usize>, usize) {
        (self.screen, self.selected_topic, self.session.current_index())
    }

    pub fn reduce<R: Rng + ?Sized>(mut self, action: Action, rng: &mut R) -> Self {
        let before = self.shuffle_key();
        let restarted = matches!(action, Action::StartQuiz);

        // The completion dialog is modal: nothing but dismissing it (or the
        // load finishing) gets through while it is up.
        if self.report.is_some() && !matches!(action, Action::DismissReport | Action::TopicsLoaded(_)) {
            return self;
        }

        match action {
            Action::TopicsLoaded(topics) => {
                if self.loading {
                    self.topics = topics;
                    self.loading = false;
                }
            }

            Action::PickTopic(i) => {
                if !self.loading && self.screen == Screen::Home && i < self.topics.len() {
                    self.selected_topic = Some(i);
                    self.screen = Screen::Topic;
                }
            }

            Action::StartQuiz => {
                let startable = self.selected_topic().is_some_and(|t| !t.questions.is_empty());
                if self.screen == Screen::Topic && startable {
                    self.session = Session::start();
                    self.screen = Screen::Quiz;
                }
            }

            Action::SelectChoice(option) => {
                if self.screen == Screen::Quiz {
                    if let Some(i) = self.selected_topic {
                        if let Some(topic) = self.topics.get(i) {
                            self.session.select_choice(topic, &option);
                        }
                    }
                }
            }

            Action::Advance => {
                if self.screen == Screen::Quiz {
                    let report = match self.selected_topic.and_then(|i| self.topics.get(i)) {
                        Some(topic) => self.session.advance(topic),
                        None => None,
                    };
                    if let Some(report) = report {
                        self.report = Some(report);
                        self.screen = Screen::Home;
                    }
                }
            }

            Action::Back => match self.screen {
                Screen::Topic => self.screen = Screen::Home,
                Screen::Quiz => self.screen = Screen::Topic,
                Screen::Home => {}
            },

            Action::GoHome => self.screen = Screen::Home,

            Action::DismissReport => self.report = None,
        }

        if self.screen != Screen::Quiz {
            self.shuffled_choices.clear();
        } else if restarted || self.shuffle_key() != before {
            self.shuffled_choices = self
                .current_question()
                .map(|q| shuffle_choices(&q.choices, rng))
                .unwrap_or_default();
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Phase;
    use crate::types::fixtures::{basics_topic, single_question_topic};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn loaded(topics: Vec<Topic>) -> AppState {
        AppState::new().reduce(Action::TopicsLoaded(topics), &mut rng())
    }

    fn run(mut state: AppState, actions: Vec<Action>, rng: &mut ChaCha8Rng) -> AppState {
        for a in actions {
            state = state.reduce(a, rng);
        }
        state
    }

    fn sorted(v: &[String]) -> Vec<String> {
        let mut v = v.to_vec();
        v.sort();
        v
    }

    #[test]
    fn starts_loading_on_home() {
        let s = AppState::new();
        assert!(s.loading);
        assert_eq!(s.screen, Screen::Home);
        assert_eq!(s.view(), View::Loading);
    }

    #[test]
    fn empty_load_lands_on_empty_home() {
        let s = loaded(vec![]);
        assert!(!s.loading);
        assert!(s.topics.is_empty());
        assert_eq!(s.view(), View::Home);
    }

    #[test]
    fn load_completes_only_once() {
        let s = loaded(vec![basics_topic()]);
        let s = s.reduce(Action::TopicsLoaded(vec![]), &mut rng());
        assert_eq!(s.topics.len(), 1);
    }

    #[test]
    fn actions_before_load_are_ignored() {
        let s = AppState::new().reduce(Action::PickTopic(0), &mut rng());
        assert_eq!(s.screen, Screen::Home);
        assert!(s.selected_topic.is_none());
    }

    #[test]
    fn pick_topic_out_of_range_stays_home() {
        let s = loaded(vec![basics_topic()]).reduce(Action::PickTopic(3), &mut rng());
        assert_eq!(s.view(), View::Home);
    }

    #[test]
    fn router_transitions() {
        let mut r = rng();
        let s = run(loaded(vec![basics_topic()]), vec![Action::PickTopic(0)], &mut r);
        assert_eq!(s.view(), View::TopicDetail);

        let s = s.reduce(Action::Back, &mut r);
        assert_eq!(s.view(), View::Home);

        let s = run(s, vec![Action::PickTopic(0), Action::StartQuiz], &mut r);
        assert_eq!(s.view(), View::Quiz);

        let s = s.reduce(Action::Back, &mut r);
        assert_eq!(s.view(), View::TopicDetail);
        assert!(s.shuffled_choices.is_empty());
    }

    #[test]
    fn start_quiz_only_from_topic_detail() {
        let s = loaded(vec![basics_topic()]).reduce(Action::StartQuiz, &mut rng());
        assert_eq!(s.screen, Screen::Home);
    }

    #[test]
    fn start_quiz_resets_session_atomically() {
        let mut r = rng();
        let s = run(
            loaded(vec![basics_topic()]),
            vec![Action::PickTopic(0), Action::StartQuiz, Action::SelectChoice("4".into()), Action::Advance],
            &mut r,
        );
        assert_eq!(s.session.current_index(), 1);
        assert_eq!(s.session.score(), 1);

        let s = run(s, vec![Action::Back, Action::StartQuiz], &mut r);
        assert_eq!(s.screen, Screen::Quiz);
        assert_eq!(s.session, Session::start());
        assert_eq!(sorted(&s.shuffled_choices), sorted(&basics_topic().questions[0].choices));
    }

    #[test]
    fn shuffled_choices_track_the_current_question() {
        let mut r = rng();
        let topic = basics_topic();
        let s = run(loaded(vec![topic.clone()]), vec![Action::PickTopic(0), Action::StartQuiz], &mut r);
        assert_eq!(sorted(&s.shuffled_choices), sorted(&topic.questions[0].choices));

        let s = run(s, vec![Action::SelectChoice("3".into()), Action::Advance], &mut r);
        assert_eq!(sorted(&s.shuffled_choices), sorted(&topic.questions[1].choices));
    }

    #[test]
    fn selecting_does_not_reshuffle() {
        let mut r = rng();
        let s = run(loaded(vec![basics_topic()]), vec![Action::PickTopic(0), Action::StartQuiz], &mut r);
        let order = s.shuffled_choices.clone();
        let s = s.reduce(Action::SelectChoice("4".into()), &mut r);
        assert_eq!(s.shuffled_choices, order);
    }

    #[test]
    fn reentering_a_question_draws_a_new_shuffle() {
        let mut topic = basics_topic();
        topic.questions[0].choices = (0..8).map(|i| i.to_string()).collect();
        topic.questions[0].answer = "0".into();

        let mut r = rng();
        let mut s = run(loaded(vec![topic]), vec![Action::PickTopic(0), Action::StartQuiz], &mut r);
        let first = s.shuffled_choices.clone();
        let mut changed = false;
        for _ in 0..10 {
            s = run(s, vec![Action::Back, Action::StartQuiz], &mut r);
            changed |= s.shuffled_choices != first;
        }
        assert!(changed);
    }

    #[test]
    fn end_to_end_two_questions() {
        let mut r = rng();
        let s = run(loaded(vec![basics_topic()]), vec![Action::PickTopic(0), Action::StartQuiz], &mut r);

        let s = s.reduce(Action::SelectChoice("4".into()), &mut r);
        assert_eq!(s.session.score(), 1);
        assert_eq!(s.session.feedback(), "Correct!");

        let s = s.reduce(Action::Advance, &mut r);
        assert_eq!(s.session.current_index(), 1);

        let s = s.reduce(Action::SelectChoice("London".into()), &mut r);
        assert_eq!(s.session.score(), 1);
        assert!(s.session.feedback().contains("Paris has been the capital since 987."));

        let s = s.reduce(Action::Advance, &mut r);
        assert_eq!(s.screen, Screen::Home);
        assert_eq!(s.session.phase(), Phase::Complete);
        let report = s.report.clone().expect("report shown");
        assert_eq!(report.score_line(), "Your score: 1/2");

        let s = s.reduce(Action::DismissReport, &mut r);
        assert!(s.report.is_none());
        assert_eq!(s.view(), View::Home);
    }

    #[test]
    fn report_is_modal() {
        let mut r = rng();
        let s = run(
            loaded(vec![single_question_topic()]),
            vec![Action::PickTopic(0), Action::StartQuiz, Action::SelectChoice("yes".into()), Action::Advance],
            &mut r,
        );
        assert_eq!(s.report.as_ref().map(|r| r.score), Some(1));
        let s = s.reduce(Action::PickTopic(0), &mut r);
        assert_eq!(s.screen, Screen::Home);
        assert!(s.report.is_some());
    }

    #[test]
    fn double_select_through_reducer_is_no_op() {
        let mut r = rng();
        let s = run(
            loaded(vec![basics_topic()]),
            vec![Action::PickTopic(0), Action::StartQuiz, Action::SelectChoice("5".into())],
            &mut r,
        );
        let before = s.clone();
        let s = s.reduce(Action::SelectChoice("4".into()), &mut r);
        assert_eq!(s, before);
    }

    #[test]
    fn unresolvable_selection_renders_invalid_and_recovers() {
        let mut s = loaded(vec![basics_topic()]);
        s.screen = Screen::Quiz;
        s.selected_topic = Some(9);
        assert_eq!(s.view(), View::Invalid);

        let s = s.reduce(Action::GoHome, &mut rng());
        assert_eq!(s.view(), View::Home);
    }

    #[test]
    fn topic_without_questions_cannot_start() {
        let mut empty = basics_topic();
        empty.questions.clear();
        let s = run(loaded(vec![empty]), vec![Action::PickTopic(0), Action::StartQuiz], &mut rng());
        assert_eq!(s.screen, Screen::Topic);
    }
}
