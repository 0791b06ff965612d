//! Config file for the mazeboard CLI.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mazeboard_core::config::{leaderboard, levels};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the saved leaderboard
    pub data_dir: PathBuf,
    /// Number of levels shown on the board
    pub level_count: usize,
    /// Key the leaderboard is stored under
    pub storage_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            level_count: levels::DEFAULT_LEVEL_COUNT,
            storage_key: leaderboard::STORAGE_KEY.to_string(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Platform data directory, falling back to the working directory
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("mazeboard"))
        .unwrap_or_else(|| PathBuf::from("."))
}
