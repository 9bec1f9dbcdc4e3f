//! Player registry: the catalogue of selectable participants.
//!
//! Loaded once at startup from a directory of portraits and read-only
//! afterwards. Players are sorted by name and numbered in that order, so
//! the same directory always yields the same `PlayerId`s.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::core::config::MissionConfig;
use crate::core::error::RegistryError;
use crate::core::player::PlayerId;

/// A selectable participant and its display asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerProfile {
    pub id: PlayerId,
    /// Display name (portrait file stem).
    pub name: String,
    /// Portrait image path.
    pub asset: PathBuf,
}

/// Ordered, deduplicated catalogue of players.
///
/// ## Example
///
/// ```
/// use crew_tasks::core::{MissionConfig, PlayerId};
/// use crew_tasks::players::PlayerRegistry;
///
/// let config = MissionConfig::new();
/// let registry = PlayerRegistry::from_names(&config, ["zoe", "abe", "zoe"]).unwrap();
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.get(PlayerId::new(0)).unwrap().name, "abe");
/// assert_eq!(registry.find_by_name("zoe"), Some(PlayerId::new(1)));
/// ```
#[derive(Clone, Debug)]
pub struct PlayerRegistry {
    players: Vec<PlayerProfile>,
    by_name: FxHashMap<String, PlayerId>,
    unassigned_asset: PathBuf,
}

impl PlayerRegistry {
    /// Scan `config.players_dir` for portraits with the configured extension.
    pub fn from_dir(config: &MissionConfig) -> Result<Self, RegistryError> {
        let dir = &config.players_dir;
        let io_err = |source| RegistryError::Io {
            path: dir.clone(),
            source,
        };

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if !path.is_file() || !has_extension(&path, &config.portrait_extension) {
                continue;
            }
            if let Some(stem) = path.file_stem() {
                entries.push((stem.to_string_lossy().into_owned(), path));
            }
        }

        if entries.is_empty() {
            return Err(RegistryError::Empty {
                path: dir.clone(),
                extension: config.portrait_extension.clone(),
            });
        }

        let registry = Self::build(entries, config.unassigned_asset.clone())?;
        info!(players = registry.len(), dir = %dir.display(), "loaded player registry");
        Ok(registry)
    }

    /// Build a registry from bare names, placing portraits in
    /// `config.players_dir` with the configured extension.
    pub fn from_names<I, S>(config: &MissionConfig, names: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = names
            .into_iter()
            .map(|name| {
                let name = name.into();
                let asset = config
                    .players_dir
                    .join(format!("{name}.{}", config.portrait_extension));
                (name, asset)
            })
            .collect();

        Self::build(entries, config.unassigned_asset.clone())
    }

    fn build(
        mut entries: Vec<(String, PathBuf)>,
        unassigned_asset: PathBuf,
    ) -> Result<Self, RegistryError> {
        if entries.is_empty() {
            return Err(RegistryError::NoPlayers);
        }

        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries.dedup_by(|a, b| a.0 == b.0);

        if entries.len() > usize::from(u16::MAX) {
            return Err(RegistryError::TooMany(entries.len()));
        }

        let mut players = Vec::with_capacity(entries.len());
        let mut by_name = FxHashMap::default();
        for (i, (name, asset)) in entries.into_iter().enumerate() {
            let id = PlayerId::new(i as u16);
            debug!(%id, %name, "registered player");
            by_name.insert(name.clone(), id);
            players.push(PlayerProfile { id, name, asset });
        }

        Ok(Self {
            players,
            by_name,
            unassigned_asset,
        })
    }

    /// Get a player by ID.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&PlayerProfile> {
        self.players.get(id.index())
    }

    /// Look up a player ID by display name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<PlayerId> {
        self.by_name.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        id.index() < self.players.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Iterate over players in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &PlayerProfile> {
        self.players.iter()
    }

    /// Image for tasks without an assignee.
    #[must_use]
    pub fn unassigned_asset(&self) -> &Path {
        &self.unassigned_asset
    }

    /// Display asset for an optional assignee.
    #[must_use]
    pub fn asset_for(&self, player: Option<PlayerId>) -> &Path {
        player
            .and_then(|id| self.get(id))
            .map_or(self.unassigned_asset(), |p| p.asset.as_path())
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}
