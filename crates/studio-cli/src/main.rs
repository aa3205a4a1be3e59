//! Studio CLI Application
//!
//! Command-line back office for studios and their ordered lists.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use studio_core::{ManagerBuilder, ReorderError, RetryPolicy};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        retry_attempts,
        command,
    } = Args::parse();

    let mut retry_policy = RetryPolicy::default();
    if let Some(attempts) = retry_attempts {
        retry_policy = retry_policy.with_max_attempts(attempts);
    }

    let manager = ManagerBuilder::new()
        .with_database_path(database_file)
        .with_retry_policy(retry_policy)
        .build()
        .await
        .context("Failed to initialize studio database")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(manager, renderer);

    info!("Studio started");

    let result = match command {
        Some(Studio { command }) => cli.handle_studio_command(command).await,
        Some(Item { command }) => cli.handle_item_command(command).await,
        None => cli.list_studios().await,
    };

    match result {
        // The notifier has already told the user.
        Err(e) if is_notified(&e) => std::process::exit(1),
        other => other,
    }
}

fn is_notified(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<ReorderError>(),
        Some(ReorderError::Persistence { .. })
    )
}
