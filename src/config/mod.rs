//! # Configuration
//!
//! Game and logging settings read from a TOML file, with defaults for every
//! value so the game runs without one.
//!
//! ```toml
//! [game]
//! capacity_kg = 3.0
//! start_room = "Reception"
//! # world_file = "data/seeds/world.json"
//! show_mass = true
//!
//! [logging]
//! level = "warn"
//! # file = "campusquest.log"
//! ```
//!
//! Precedence: CLI flags > config file > defaults.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

use crate::game::{Mass, DEFAULT_START_ROOM_ID, MAX_INVENTORY_MASS_KG};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Carrying capacity in kilograms. Reaching it exactly is allowed.
    #[serde(default = "default_capacity_kg")]
    pub capacity_kg: f64,
    /// Room the player starts in and must return to.
    #[serde(default = "default_start_room")]
    pub start_room: String,
    /// JSON world seed; the built-in world is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_file: Option<String>,
    /// Print the "Inventory mass" line every turn.
    #[serde(default = "default_show_mass")]
    pub show_mass: bool,
}

fn default_capacity_kg() -> f64 {
    MAX_INVENTORY_MASS_KG
}

fn default_start_room() -> String {
    DEFAULT_START_ROOM_ID.to_string()
}

fn default_show_mass() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            capacity_kg: default_capacity_kg(),
            start_room: default_start_room(),
            world_file: None,
            show_mass: default_show_mass(),
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
    // stdout is the game screen; keep it quiet unless asked.
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
    /// Parsed level, falling back to `Warn` for unrecognised strings.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Warn)
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
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path.display(), e))?;

        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields `Ok(None)`. A file
    /// that exists and fails to parse or validate is still an error.
    pub fn load_if_present<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Create a default configuration file
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(&Config::default())
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path.display(), e))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if Mass::from_kg(self.game.capacity_kg).is_none() {
            bail!(
                "game.capacity_kg must be a finite, non-negative number (got {})",
                self.game.capacity_kg
            );
        }
        if self.game.start_room.trim().is_empty() {
            bail!("game.start_room must not be empty");
        }
        Ok(())
    }

    /// Capacity as an exact mass. Call after [`Config::validate`].
    pub fn capacity(&self) -> Result<Mass> {
        Mass::from_kg(self.game.capacity_kg)
            .ok_or_else(|| anyhow!("invalid capacity {}", self.game.capacity_kg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.game.capacity_kg, 3.0);
        assert_eq!(config.game.start_room, "Reception");
        assert!(config.game.world_file.is_none());
        assert!(config.game.show_mass);
        assert_eq!(config.capacity().unwrap(), Mass::from_grams(3000));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[game]\ncapacity_kg = 5.5").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.capacity().unwrap(), Mass::from_grams(5500));
        assert_eq!(config.game.start_room, "Reception");
        assert_eq!(config.logging.level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[game]\ncapacity_kg = -1.0").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_create_default_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::create_default(&path).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.game.capacity_kg, 3.0);
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(Config::load("/nonexistent/campusquest.toml").is_err());
    }

    #[test]
    fn test_load_if_present_skips_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_if_present(dir.path().join("config.toml")).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_if_present_reports_bad_file() {
        let mut broken = NamedTempFile::new().unwrap();
        writeln!(broken, "[game\ncapacity_kg = ").unwrap();
        assert!(Config::load_if_present(broken.path()).is_err());

        let mut invalid = NamedTempFile::new().unwrap();
        writeln!(invalid, "[game]\ncapacity_kg = -1.0").unwrap();
        assert!(Config::load_if_present(invalid.path()).is_err());
    }
}
