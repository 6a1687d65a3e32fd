//! Snowman - Unified CLI
//!
//! Serves the webhook or plays in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use snowman::cli::{Cli, Command};
use snowman::{console, router, AppState, SnowmanConfig, Voice};
use snowman_core::Engine;
use std::sync::Arc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port, host } => {
            init_tracing("info,snowman=debug,snowman_core=debug");
            let config = SnowmanConfig::load_or_default(&cli.config)?.with_overrides(host, port, None);
            run_server(config).await
        }
        Command::Play { seed } => {
            init_tracing("warn");
            let config = SnowmanConfig::load_or_default(&cli.config)?.with_overrides(None, None, seed);
            run_console(config)
        }
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the HTTP webhook server
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
async fn run_server(config: SnowmanConfig) -> Result<()> {
    let engine = Engine::new(config.dictionary()?);
    let state = Arc::new(AppState::new(engine, Voice::new(config.voice_seed())));

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!("Webhook ready at http://{}:{}/webhook", config.host(), config.port());

    axum::serve(listener, router(state)).await?;

    Ok(())
}

/// Run the terminal game
#[instrument(skip(config))]
fn run_console(config: SnowmanConfig) -> Result<()> {
    let mut engine = Engine::new(config.dictionary()?);
    let mut voice = Voice::new(config.voice_seed());

    println!("*** SNOWMAN ***");
    println!("Type a letter or a word. 'help' for rules, 'new' for another word, 'quit' to stop.");
    println!();

    let stdin = std::io::stdin();
    console::run(&mut engine, &mut voice, stdin.lock(), std::io::stdout())?;
    Ok(())
}
