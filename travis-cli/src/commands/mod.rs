//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod build;
mod repo;
mod user;

pub use build::BuildCommands;
pub use repo::RepoCommands;
pub use user::UserCommands;

use anyhow::Result;
use clap::Subcommand;
use tracing::debug;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Repository activation and settings
    Repo {
        #[command(subcommand)]
        command: RepoCommands,
    },
    /// Build triggering, jobs and logs
    Build {
        #[command(subcommand)]
        command: BuildCommands,
    },
    /// Current user and account sync
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    debug!("Dispatching {} command", command.name());

    match command {
        Commands::Repo { command } => repo::handle_repo_command(command, config).await,
        Commands::Build { command } => build::handle_build_command(command, config).await,
        Commands::User { command } => user::handle_user_command(command, config).await,
    }
}

impl Commands {
    /// Subcommand group name, for logging
    fn name(&self) -> &'static str {
        match self {
            Commands::Repo { .. } => "repo",
            Commands::Build { .. } => "build",
            Commands::User { .. } => "user",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_command_names() {
        let cli = TestCli::try_parse_from(["travis", "user", "sync"]).unwrap();
        assert_eq!(cli.command.name(), "user");

        let cli = TestCli::try_parse_from(["travis", "repo", "set", "cs50", "hello", "build_pushes", "false"])
            .unwrap();
        assert_eq!(cli.command.name(), "repo");

        let cli = TestCli::try_parse_from(["travis", "build", "jobs", "42"]).unwrap();
        assert_eq!(cli.command.name(), "build");
    }

    #[test]
    fn test_unknown_setting_rejected() {
        assert!(
            TestCli::try_parse_from(["travis", "repo", "set", "cs50", "hello", "nope", "true"])
                .is_err()
        );
    }
}
