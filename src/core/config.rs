//! Mission configuration.
//!
//! The presentation layer builds a `MissionConfig` at startup:
//! - where player portraits live and which files count as players
//! - the image shown for unassigned tasks
//! - an optional fixed shuffle seed for reproducible sessions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Complete mission configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionConfig {
    /// Fixed shuffle seed. `None` picks a fresh one per mission.
    pub seed: Option<u64>,

    /// Directory scanned for player portraits.
    pub players_dir: PathBuf,

    /// File extension (without the dot) of player portraits.
    pub portrait_extension: String,

    /// Image shown for tasks nobody has taken yet.
    pub unassigned_asset: PathBuf,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            players_dir: PathBuf::from("players"),
            portrait_extension: "png".to_string(),
            unassigned_asset: PathBuf::from("assets/blank.png"),
        }
    }
}

impl MissionConfig {
    /// Create a configuration with the default asset layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the player portrait directory.
    #[must_use]
    pub fn with_players_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.players_dir = dir.into();
        self
    }

    /// Set the portrait file extension. A leading dot is ignored.
    #[must_use]
    pub fn with_portrait_extension(mut self, extension: impl AsRef<str>) -> Self {
        self.portrait_extension = extension.as_ref().trim_start_matches('.').to_string();
        self
    }

    /// Set the image used for unassigned tasks.
    #[must_use]
    pub fn with_unassigned_asset(mut self, asset: impl Into<PathBuf>) -> Self {
        self.unassigned_asset = asset.into();
        self
    }

    /// Build the RNG for a new mission.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        self.seed.map_or_else(GameRng::from_entropy, GameRng::new)
    }
}
