//! Snowman webhook and console front ends.
//!
//! The game rules live in [`snowman_core`]; this crate adds what a deployment
//! needs around them.
//!
//! # Architecture
//!
//! - **Webhook**: axum server that maps platform intents onto the engine
//! - **Voice**: spoken phrasing for each turn
//! - **Console**: the same engine played over stdin/stdout
//! - **Config**: TOML file plus command-line overrides
//!
//! # Example
//!
//! ```no_run
//! use snowman::{router, AppState, SnowmanConfig, Voice};
//! use snowman_core::Engine;
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = SnowmanConfig::default();
//! let engine = Engine::new(config.dictionary()?);
//! let state = Arc::new(AppState::new(engine, Voice::new(config.voice_seed())));
//!
//! let listener = tokio::net::TcpListener::bind(("127.0.0.1", 3000)).await?;
//! axum::serve(listener, router(state)).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
pub mod console;
mod voice;
mod webhook;

// Crate-level exports - Configuration
pub use config::{ConfigError, SnowmanConfig};

// Crate-level exports - Speech
pub use voice::Voice;

// Crate-level exports - Webhook
pub use webhook::{router, AppState, WebhookError, WebhookRequest, WebhookResponse};
