//! Server configuration via `pokedex.toml`
//!
//! Every field has a default, so an empty file (or no file at all) is a valid
//! configuration. Command-line flags override file values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use pokedex_core::{Error, Result};
use pokedex_executor::DEFAULT_GREETING;

/// Config file looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "pokedex.toml";

/// Server configuration loaded from `pokedex.toml`.
///
/// # Example
///
/// ```toml
/// host = "127.0.0.1"
/// port = 8000
/// data_file = "pokemon.json"
/// greeting = "Hello Les gars !"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Seed file: a JSON array of records without ids.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Message returned by `GET /`.
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_data_file() -> PathBuf {
    PathBuf::from("pokemon.json")
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: default_data_file(),
            greeting: default_greeting(),
        }
    }
}

impl ServerConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Pokedex server configuration

# Interface and port to listen on
host = "127.0.0.1"
port = 8000

# Seed file loaded at startup (JSON array, ids assigned by position)
data_file = "pokemon.json"

# Message returned by GET /
greeting = "Hello Les gars !"
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the text is not valid TOML or has unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("invalid pokedex.toml: {}", e)))
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load an explicit config file, or `pokedex.toml` from `dir` if present,
    /// or fall back to defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let implicit = dir.join(CONFIG_FILE_NAME);
        if implicit.is_file() {
            Self::from_file(&implicit)
        } else {
            Ok(Self::default())
        }
    }

    /// `host:port` to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
