//! Server configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use snowman_core::{Dictionary, DictionaryError};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for the snowman server and console.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SnowmanConfig {
    /// Host to bind the webhook to.
    #[serde(default = "default_host")]
    host: String,

    /// Port to bind the webhook to.
    #[serde(default = "default_port")]
    port: u16,

    /// Optional newline-separated word list. The bundled corpus is used otherwise.
    #[serde(default)]
    words_file: Option<PathBuf>,

    /// Optional seed for word and phrase selection.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[instrument]
fn default_port() -> u16 {
    3000
}

impl Default for SnowmanConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            words_file: None,
            seed: None,
        }
    }
}

impl SnowmanConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, falling back to defaults otherwise.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Builds the configured dictionary.
    #[instrument(skip(self), fields(words_file = ?self.words_file, seeded = self.seed.is_some()))]
    pub fn dictionary(&self) -> Result<Dictionary, DictionaryError> {
        match &self.words_file {
            Some(path) => Dictionary::from_file(path, self.seed),
            None => Dictionary::builtin(self.seed),
        }
    }

    /// Seed for the phrase generator, derived from the word seed so a seeded
    /// run repeats exactly.
    pub fn voice_seed(&self) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(1))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
