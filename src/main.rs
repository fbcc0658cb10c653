use anyhow::Result;
use clap::Parser;

mod app;
mod cli;
mod defaults;
mod loader;
mod logging;
mod quiz;
mod screens;
mod shuffle;
mod state;
mod types;
mod ui;

use crate::cli::{Cli, Command};
use crate::loader::{load_topics, HttpTopicSource};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(&cli.log_dir)?;

    let source = HttpTopicSource::new(cli.endpoint);
    tracing::info!(endpoint = source.endpoint(), "Starting study-quiz");

    match cli.cmd.unwrap_or(Command::Run) {
        Command::Run => app::run_menu(Box::new(source)).await,

        Command::Topics => {
            let topics = load_topics(&source).await;
            if topics.is_empty() {
                println!("No topics available.");
            }
            for t in &topics {
                println!("{} ({} questions)", t.title, t.questions.len());
            }
            Ok(())
        }
    }
}
