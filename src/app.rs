use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{backend::CrosstermBackend, layout::Rect, prelude::Frame, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::defaults::Defaults;
use crate::loader::{load_topics, TopicSource};
use crate::screens::{
    ConfirmQuitScreen, HomeScreen, InvalidScreen, LoadingScreen, QuizCompleteScreen, QuizScreen, TopicScreen,
};
use crate::state::{Action, AppState, View};
use crate::types::Topic;

pub enum Transition {
    Stay,
    /// Feed an action through the state reducer.
    Dispatch(Action),
    /// Open a modal on top of the current view.
    Push(Box<dyn ScreenWidget>),
    /// Close the top modal.
    Pop,
    Quit,
}

/// Shared context handed to every screen: the reducer state and the RNG that
/// drives choice shuffling.
pub struct AppCtx {
    pub state: AppState,
    rng: StdRng,
}

impl Default for AppCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl AppCtx {
    pub fn new() -> Self {
        Self { state: AppState::new(), rng: StdRng::from_entropy() }
    }

    #[cfg(test)]
    pub fn with_state(state: AppState) -> Self {
        Self { state, rng: StdRng::seed_from_u64(0) }
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, "dispatch");
        let had_report = self.state.report.is_some();
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action, &mut self.rng);

        if let (false, Some(report)) = (had_report, &self.state.report) {
            tracing::info!(
                topic = %report.topic_title,
                score = report.score,
                total = report.total,
                "Quiz complete"
            );
        }
    }
}

pub trait ScreenWidget {
    fn title(&self) -> &str { "Study Quiz" }
    fn draw(&self, f: &mut Frame<'_>, area: Rect, ctx: &AppCtx);
    fn on_key(&mut self, key: KeyEvent, ctx: &AppCtx) -> Transition;
}

fn view_widget(view: View) -> Box<dyn ScreenWidget> {
    match view {
        View::Loading => Box::new(LoadingScreen),
        View::Home => Box::new(HomeScreen::default()),
        View::TopicDetail => Box::new(TopicScreen::default()),
        View::Quiz => Box::new(QuizScreen::default()),
        View::Invalid => Box::new(InvalidScreen::default()),
    }
}

/// Base view derived from the state, plus any modals opened on top of it.
pub struct Router {
    view: View,
    base: Box<dyn ScreenWidget>,
    report: QuizCompleteScreen,
    overlays: Vec<Box<dyn ScreenWidget>>,
}

impl Router {
    pub fn new(ctx: &AppCtx) -> Self {
        let view = ctx.state.view();
        Self { view, base: view_widget(view), report: QuizCompleteScreen, overlays: Vec::new() }
    }

    /// Rebuilds the base widget when the state now resolves to another view.
    /// Screen-local cursor state is kept while the view stays the same.
    pub fn sync(&mut self, ctx: &AppCtx) {
        let view = ctx.state.view();
        if view != self.view {
            self.view = view;
            self.base = view_widget(view);
        }
    }

    pub fn draw(&self, f: &mut Frame<'_>, ctx: &AppCtx) {
        let size = f.size();
        self.base.draw(f, size, ctx);
        if ctx.state.report.is_some() {
            self.report.draw(f, size, ctx);
        }
        for overlay in &self.overlays {
            overlay.draw(f, size, ctx);
        }
    }

    /// Routes a key press and applies the resulting transition.
    /// Returns `true` when the app should exit.
    pub fn handle_key(&mut self, k: KeyEvent, ctx: &mut AppCtx) -> bool {
        // GLOBAL HOTKEY: Ctrl+Q shows confirm quit from anywhere
        if k.modifiers.contains(KeyModifiers::CONTROL) && matches!(k.code, KeyCode::Char('q' | 'Q')) {
            if self.overlays.is_empty() {
                self.overlays.push(Box::new(ConfirmQuitScreen::new()));
            }
            return false;
        }

        let transition = if let Some(top) = self.overlays.last_mut() {
            top.on_key(k, ctx)
        } else if ctx.state.report.is_some() {
            self.report.on_key(k, ctx)
        } else {
            self.base.on_key(k, ctx)
        };

        match transition {
            Transition::Stay => {}
            Transition::Dispatch(action) => ctx.dispatch(action),
            Transition::Push(s) => self.overlays.push(s),
            Transition::Pop => {
                self.overlays.pop();
            }
            Transition::Quit => return true,
        }
        self.sync(ctx);
        false
    }
}

/// Starts the single topics load in the background and runs the TUI until quit.
pub async fn run_menu(source: Box<dyn TopicSource>) -> Result<()> {
    let (tx, mut rx) = oneshot::channel::<Vec<Topic>>();
    tokio::spawn(async move {
        let topics = load_topics(source.as_ref()).await;
        let _ = tx.send(topics);
    });

    // terminal init
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?; // clean start

    let result = event_loop(&mut terminal, &mut rx);

    // restore, even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    rx: &mut oneshot::Receiver<Vec<Topic>>,
) -> Result<()> {
    let mut ctx = AppCtx::new();
    let mut router = Router::new(&ctx);

    loop {
        if ctx.state.loading {
            match rx.try_recv() {
                Ok(topics) => ctx.dispatch(Action::TopicsLoaded(topics)),
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Closed) => {
                    tracing::error!("Topic loader ended without a result");
                    ctx.dispatch(Action::TopicsLoaded(Vec::new()));
                }
            }
            router.sync(&ctx);
        }

        terminal.draw(|f| router.draw(f, &ctx))?;

        if event::poll(Duration::from_millis(Defaults::POLL_INTERVAL_MS))? {
            if let Event::Key(k) = event::read()? {
                if k.kind == KeyEventKind::Press && router.handle_key(k, &mut ctx) {
                    break;
                }
            }
        }
    }
    Ok(())
}
