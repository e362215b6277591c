//! User command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;

use crate::config::Config;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Show the user owning the token
    Get,
    /// Sync repositories from GitHub and wait for completion
    Sync,
}

/// Handle user commands
pub async fn handle_user_command(command: UserCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        UserCommands::Get => {
            let Some(user) = client.get_user().await? else {
                println!("{}", "No user found for this token.".yellow());
                return Ok(());
            };

            println!("{} {}", "User".bold(), user.login.bold());
            println!("  ID:       {}", user.id);
            if let Some(name) = &user.name {
                println!("  Name:     {}", name);
            }
            let syncing = if user.is_syncing {
                "syncing".yellow()
            } else {
                "idle".green()
            };
            println!("  Sync:     {}", syncing);
            if let Some(synced_at) = user.synced_at {
                println!(
                    "  Synced:   {}",
                    synced_at.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
                );
            }
        }
        UserCommands::Sync => {
            client.sync().await.context("Failed to sync account")?;
            println!("{} Account synced", "✓".green());
        }
    }

    Ok(())
}
