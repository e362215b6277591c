//! Travis CLI
//!
//! Command-line interface over the Travis CI client.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use travis_client::config::DEFAULT_BASE_URL;

#[derive(Parser)]
#[command(name = "travis")]
#[command(about = "Travis CI repository and build CLI", long_about = None)]
struct Cli {
    /// Travis API token
    #[arg(long, env = "TRAVIS_TOKEN", hide_env_values = true)]
    token: String,

    /// Travis API URL
    #[arg(long, env = "TRAVIS_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Polls before giving up on activation or sync
    #[arg(long, env = "TRAVIS_POLL_ATTEMPTS", default_value_t = 10)]
    poll_attempts: u32,

    /// Seconds between polls
    #[arg(long, env = "TRAVIS_POLL_INTERVAL_SECS", default_value_t = 1)]
    poll_interval: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travis_client=info,travis_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        token: cli.token,
        api_url: cli.api_url,
        poll_attempts: cli.poll_attempts,
        poll_interval: cli.poll_interval,
    };

    debug!(
        "Using Travis API at {} (poll: {} x {}s)",
        config.api_url, config.poll_attempts, config.poll_interval
    );

    if let Err(e) = handle_command(cli.command, &config).await {
        error!("Command failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}
