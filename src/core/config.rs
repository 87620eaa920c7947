//! Application configuration
//!
//! Everything the CLI needs to locate the catalogs and pick a presentation
//! mode. Values come from `Default`, optionally overlaid by a TOML file, and
//! finally by command-line flags.

use crate::core::error::{Result, ScrollError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How eligible skills are grouped for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingStrategy {
    /// One group per exact enabler set
    Shared,
    /// One group per individual enabler; skills with several enablers repeat
    #[default]
    PerMonster,
}

/// Configuration for loading catalogs and presenting results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    /// Directory holding the three catalog files
    pub data_dir: PathBuf,

    /// Monster catalog file name, relative to `data_dir`
    pub monsters_file: String,

    /// Action catalog file name, relative to `data_dir`
    pub actions_file: String,

    /// Trait catalog file name, relative to `data_dir`
    pub traits_file: String,

    /// Include single-type skills alongside Maverick skills
    ///
    /// Mirrors the "show all skills" toggle. Off by default, so queries
    /// return two-type skills only.
    pub show_all_skills: bool,

    /// Grouping used when presenting results
    pub grouping: GroupingStrategy,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            monsters_file: "monsters.json".to_string(),
            actions_file: "actions.json".to_string(),
            traits_file: "traits.json".to_string(),
            show_all_skills: false,
            grouping: GroupingStrategy::PerMonster,
        }
    }
}

impl ScrollConfig {
    /// Parse a configuration from TOML text; missing keys take defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ScrollError::ConfigError(e.to_string()))
    }

    /// Load a configuration file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ScrollError::ConfigError(format!("{}: {}", path.display(), e)))
    }

    pub fn monsters_path(&self) -> PathBuf {
        self.data_dir.join(&self.monsters_file)
    }

    pub fn actions_path(&self) -> PathBuf {
        self.data_dir.join(&self.actions_file)
    }

    pub fn traits_path(&self) -> PathBuf {
        self.data_dir.join(&self.traits_file)
    }
}
