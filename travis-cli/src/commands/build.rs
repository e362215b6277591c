//! Build command handlers
//!
//! Triggering builds and reading back their jobs and logs.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use travis_client::{BuildRequest, TravisClient};
use travis_core::domain::job::{Job, JobState};
use travis_core::domain::log::assemble;

use crate::config::Config;

/// Build subcommands
#[derive(Subcommand)]
pub enum BuildCommands {
    /// Request a build of a branch
    Trigger {
        /// Repository owner
        owner: String,
        /// Repository name
        repo: String,
        /// Branch to build
        branch: String,

        /// Print the request payload instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
    /// List the jobs of a build
    Jobs {
        /// Build ID
        build_id: u64,
    },
    /// Print the log of a job
    Log {
        /// Job ID
        job_id: u64,
    },
}

/// Handle build commands
pub async fn handle_build_command(command: BuildCommands, config: &Config) -> Result<()> {
    match command {
        BuildCommands::Trigger {
            owner,
            repo,
            branch,
            dry_run,
        } => {
            let request = BuildRequest::for_branch(branch.as_str());
            if dry_run {
                println!("{}", serde_json::to_string_pretty(&request)?);
                return Ok(());
            }

            let client = config.client()?;
            client
                .build_with(&owner, &repo, request)
                .await
                .with_context(|| format!("Failed to build {}/{}@{}", owner, repo, branch))?;
            println!(
                "{} Build requested for {}/{} on {}",
                "✓".green(),
                owner,
                repo,
                branch.bold()
            );
            Ok(())
        }
        BuildCommands::Jobs { build_id } => list_jobs(&config.client()?, build_id).await,
        BuildCommands::Log { job_id } => print_log(&config.client()?, job_id).await,
    }
}

/// List the jobs of a build
async fn list_jobs(client: &TravisClient, build_id: u64) -> Result<()> {
    let Some(jobs) = client.get_jobs(build_id).await? else {
        println!("{}", format!("Build {} not found.", build_id).yellow());
        return Ok(());
    };

    if jobs.is_empty() {
        println!("{}", "No jobs found.".yellow());
    } else {
        println!("{}", format!("Found {} job(s):", jobs.len()).bold());
        println!();
        for job in jobs {
            print_job_summary(&job);
        }
    }

    Ok(())
}

/// Print the assembled log of a job
async fn print_log(client: &TravisClient, job_id: u64) -> Result<()> {
    let Some(parts) = client.get_log_parts(job_id).await? else {
        println!("{}", format!("Log for job {} not found.", job_id).yellow());
        return Ok(());
    };

    println!("{}", format!("Log for job {}:", job_id).bold());
    println!("{}", "─".repeat(80).dimmed());
    print!("{}", assemble(&parts));
    println!("{}", "─".repeat(80).dimmed());

    if !parts.iter().any(|p| p.is_final) {
        println!("{}", "Log is incomplete; the job is still running.".dimmed());
    }

    Ok(())
}

/// Print a job summary
fn print_job_summary(job: &Job) {
    let state = match &job.state {
        Some(state) => colorize_state(state),
        None => "unknown".dimmed(),
    };

    println!(
        "  {} Job {} {}",
        "▸".cyan(),
        job.id.to_string().bold(),
        job.number.as_deref().unwrap_or_default().dimmed()
    );
    println!("    State:    {}", state);
    if let Some(started_at) = job.started_at {
        println!(
            "    Started:  {}",
            started_at.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }
    let finished = job.state.as_ref().is_some_and(JobState::is_finished);
    if let (true, Some(finished_at)) = (finished, job.finished_at) {
        println!(
            "    Finished: {}",
            finished_at.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }
    println!();
}

/// Colorize job state for display
fn colorize_state(state: &JobState) -> ColoredString {
    let label = state.to_string();
    match state {
        JobState::Passed => label.green(),
        JobState::Failed | JobState::Errored => label.red(),
        JobState::Canceled => label.dimmed(),
        _ => label.yellow(),
    }
}
