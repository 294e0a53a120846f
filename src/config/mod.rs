//! # Configuration Management Module
//!
//! Loads and writes the game's TOML configuration.
//!
//! ## Configuration Structure
//!
//! - [`GameConfig`] - banner name, optional world seed, command echo
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zuul::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Load configuration from file
//!     let config = Config::load("config.toml").await?;
//!     println!("Game: {}", config.game.name);
//!
//!     // Create default configuration
//!     Config::create_default("config.toml").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! name = "World of Zuul"
//! world_seed = "data/seeds/campus.json"
//! echo_commands = false
//!
//! [logging]
//! level = "info"
//! file = "zuul.log"
//! ```
//!
//! Precedence: CLI args > config file > defaults.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::engine::DEFAULT_GAME_NAME;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name used in the welcome banner.
    #[serde(default = "default_game_name")]
    pub name: String,
    /// Optional JSON world seed. When unset the built-in campus world is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_seed: Option<String>,
    /// Echo each input line back before its reply (handy for scripted runs).
    #[serde(default)]
    pub echo_commands: bool,
}

fn default_game_name() -> String {
    DEFAULT_GAME_NAME.to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            name: default_game_name(),
            world_seed: None,
            echo_commands: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parse `level`; unrecognised values fall back to `Warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level
            .parse::<log::LevelFilter>()
            .unwrap_or(log::LevelFilter::Warn)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.game.name, "World of Zuul");
        assert!(config.game.world_seed.is_none());
        assert!(!config.game.echo_commands);
        assert_eq!(config.logging.level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[game]\nname = \"Campus\"\n").unwrap();
        assert_eq!(config.game.name, "Campus");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_level_filter_parsing() {
        let logging = LoggingConfig {
            level: "debug".into(),
            file: None,
        };
        assert_eq!(logging.level_filter(), log::LevelFilter::Debug);

        let bogus = LoggingConfig {
            level: "loud".into(),
            file: None,
        };
        assert_eq!(bogus.level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let mut config = Config::default();
        config.game.world_seed = Some("data/seeds/campus.json".into());
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.game.world_seed.as_deref(), Some("data/seeds/campus.json"));
    }

    #[tokio::test]
    async fn test_create_default_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path = path.to_str().unwrap();

        Config::create_default(path).await.unwrap();
        let config = Config::load(path).await.unwrap();
        assert_eq!(config.game.name, DEFAULT_GAME_NAME);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = Config::load("/nonexistent/zuul.toml").await.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
