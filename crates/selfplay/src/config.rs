//! Self-play configuration

use chess_rules::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::SelfPlayError;

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

/// Settings for a self-play run.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// Number of games to play
    pub games: u32,
    /// Plies after which an unfinished game is abandoned
    pub max_plies: u32,
    /// RNG seed for the engines (None = OS entropy)
    pub seed: Option<u64>,
    /// Color shown at the bottom of rendered boards
    pub perspective: Color,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Where to write the JSON results
    pub output: Option<PathBuf>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_plies: 400,
            seed: None,
            perspective: Color::White,
            alternate_colors: true,
            output: None,
        }
    }
}

impl SelfPlayConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, SelfPlayError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, SelfPlayError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
