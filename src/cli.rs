use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::defaults::Defaults;

/// Study quiz: browse topics and answer their questions in the terminal
#[derive(Parser, Debug)]
#[command(version, about = "Study quiz terminal client")]
pub struct Cli {
    /// URL serving the `{ "topics": [...] }` document
    #[arg(long, global = true, default_value = Defaults::TOPICS_ENDPOINT)]
    pub endpoint: String,

    /// Directory for the rotating log file
    #[arg(long, global = true, default_value = Defaults::LOG_DIR)]
    pub log_dir: PathBuf,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive quiz (default when no subcommand is given)
    Run,

    /// Load the topics once and print their titles with question counts
    Topics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_flags() {
        let cli = Cli::try_parse_from(["study-quiz"]).unwrap();
        assert_eq!(cli.endpoint, Defaults::TOPICS_ENDPOINT);
        assert_eq!(cli.log_dir, PathBuf::from(Defaults::LOG_DIR));
        assert!(cli.cmd.is_none());
    }

    #[test]
    fn endpoint_is_injectable_after_subcommand() {
        let cli = Cli::try_parse_from(["study-quiz", "topics", "--endpoint", "http://10.0.0.2:3000/topics"])
            .unwrap();
        assert_eq!(cli.endpoint, "http://10.0.0.2:3000/topics");
        assert!(matches!(cli.cmd, Some(Command::Topics)));
    }
}
