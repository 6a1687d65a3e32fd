//! Command-line interface for snowman.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Snowman - word-guessing game behind a conversational webhook
#[derive(Parser, Debug)]
#[command(name = "snowman")]
#[command(about = "Snowman word-guessing game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "snowman.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP webhook server
    Serve {
        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,
    },

    /// Play in the terminal
    Play {
        /// Seed for word and phrase selection (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },
}
