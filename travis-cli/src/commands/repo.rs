//! Repository command handlers
//!
//! Lookup, activation, configuration and individual settings.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use travis_client::{RepoSetting, TravisClient};
use travis_core::domain::repository::Repository;

use crate::config::Config;

/// Repository subcommands
#[derive(Subcommand)]
pub enum RepoCommands {
    /// Show a repository
    Get {
        /// Repository owner
        owner: String,
        /// Repository name
        repo: String,
    },
    /// Enable a repository and wait until it is active
    Activate {
        /// Repository owner
        owner: String,
        /// Repository name
        repo: String,
    },
    /// Activate a repository and turn off automatic builds
    Configure {
        /// Repository owner
        owner: String,
        /// Repository name
        repo: String,
    },
    /// Change a boolean repository setting
    Set {
        /// Repository owner
        owner: String,
        /// Repository name
        repo: String,
        /// Setting name (e.g., build_pushes, auto_cancel_pushes)
        setting: RepoSetting,
        /// New value
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}

/// Handle repository commands
pub async fn handle_repo_command(command: RepoCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        RepoCommands::Get { owner, repo } => get_repo(&client, &owner, &repo).await,
        RepoCommands::Activate { owner, repo } => {
            client
                .activate(&owner, &repo)
                .await
                .with_context(|| format!("Failed to activate {}/{}", owner, repo))?;
            println!("{} {}/{} is active", "✓".green(), owner, repo);
            Ok(())
        }
        RepoCommands::Configure { owner, repo } => {
            client
                .configure(&owner, &repo)
                .await
                .with_context(|| format!("Failed to configure {}/{}", owner, repo))?;
            println!("{} {}/{} configured", "✓".green(), owner, repo);
            Ok(())
        }
        RepoCommands::Set {
            owner,
            repo,
            setting,
            value,
        } => {
            client
                .set_setting(&owner, &repo, setting, value)
                .await
                .with_context(|| format!("Failed to set {} on {}/{}", setting, owner, repo))?;
            println!("{} {} = {}", "✓".green(), setting, value);
            Ok(())
        }
    }
}

/// Get and display a repository
async fn get_repo(client: &TravisClient, owner: &str, repo: &str) -> Result<()> {
    match client.get_repo(owner, repo).await? {
        Some(found) => print_repo_details(&found),
        None => println!("{}", format!("Repository {}/{} not found.", owner, repo).yellow()),
    }

    Ok(())
}

/// Print repository details
fn print_repo_details(repo: &Repository) {
    let status = if repo.active {
        "active".green()
    } else {
        "inactive".red()
    };

    println!("{} {}", "Repository".bold(), repo.slug.bold());
    println!("  ID:       {}", repo.id);
    println!("  Owner:    {}", repo.owner_login());
    println!("  Status:   {}", status);
    if let Some(branch) = &repo.default_branch {
        println!("  Branch:   {}", branch.name);
    }
    if let Some(description) = &repo.description {
        println!("  About:    {}", description.dimmed());
    }
}
