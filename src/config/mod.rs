//! # Configuration Management Module
//!
//! Settings for the `advworld` tool, stored as TOML.
//!
//! - [`WorldConfig`] - which seed file to load and where the player starts
//! - [`PlayerConfig`] - inventory capacity for new players
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ## Configuration File Format
//!
//! ```toml
//! [world]
//! seed_file = "data/seeds/world.json"
//! start_zone = "Entrée"
//!
//! [player]
//! capacity = 10
//!
//! [logging]
//! level = "info"
//! file = "advworld.log"
//! ```
//!
//! Every section and field is optional; missing values take their defaults.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::world::{Player, DEFAULT_CAPACITY};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WorldConfig {
    pub seed_file: String,
    /// Name of the zone a new game starts in.
    pub start_zone: String,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed_file: "data/seeds/world.json".to_string(),
            start_zone: "Entrée".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Maximum total weight a player can carry
    pub capacity: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl PlayerConfig {
    pub fn new_player(&self) -> Player {
        Player::with_capacity(self.capacity)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub world: WorldConfig,
    pub player: PlayerConfig,
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

        config.validate()?;
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

    pub fn validate(&self) -> Result<()> {
        if self.world.seed_file.trim().is_empty() {
            return Err(anyhow!("world.seed_file must not be empty"));
        }
        if self.world.start_zone.trim().is_empty() {
            return Err(anyhow!("world.start_zone must not be empty"));
        }
        Ok(())
    }

    /// Level filter named by `logging.level`, falling back to info.
    pub fn log_level(&self) -> log::LevelFilter {
        self.logging
            .level
            .parse()
            .unwrap_or(log::LevelFilter::Info)
    }
}
