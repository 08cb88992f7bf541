mod codegen;
mod record;
mod view;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::Bootstrap;
use crate::storage::{Storage, STORAGE_KEY};
use crate::{Error, Result};

pub use codegen::generate_lookup_code;
pub use record::{GameDetails, GameId, GameRecord};
pub use view::{GameListView, GameRow};

/// File name offered for exports
pub const EXPORT_FILE_NAME: &str = "roblox_games.json";

/// Where the collection came from when the manager was initialized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    Bootstrap,
    Storage,
}

/// Counts reported by an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub skipped: usize,
}

/// Owns the ordered game collection and mirrors it to durable storage after
/// every mutation.
pub struct GameManager<S: Storage> {
    storage: S,
    games: Vec<GameRecord>,
    origin: LoadOrigin,
}

impl<S: Storage> GameManager<S> {
    /// Load the collection from storage only.
    pub fn open(storage: S) -> Self {
        let games = Self::load(&storage);
        log::info!("Loaded {} game(s) from storage", games.len());

        Self {
            storage,
            games,
            origin: LoadOrigin::Storage,
        }
    }

    /// Seed the collection from the bootstrap document when one is given and
    /// reachable, otherwise fall back to storage. Never fails.
    pub async fn initialize(storage: S, bootstrap: Option<&Bootstrap>) -> Self {
        let Some(bootstrap) = bootstrap else {
            return Self::open(storage);
        };

        match bootstrap.fetch().await {
            Ok(fetched) => {
                let mut manager = Self {
                    storage,
                    games: dedup(fetched),
                    origin: LoadOrigin::Bootstrap,
                };
                log::info!(
                    "Loaded {} game(s) from bootstrap document {}",
                    manager.games.len(),
                    bootstrap.source()
                );
                if let Err(e) = manager.persist() {
                    log::warn!("Failed to persist bootstrap collection: {}", e);
                }
                manager
            }
            Err(e) => {
                log::warn!("{}. Falling back to stored games.", e);
                Self::open(storage)
            }
        }
    }

    /// Read the stored collection, yielding an empty one when the entry is
    /// missing or unreadable.
    pub fn load(storage: &S) -> Vec<GameRecord> {
        match Self::read_stored(storage) {
            Ok(games) => dedup(games),
            Err(e) => {
                log::warn!("{}. Starting with an empty list.", e);
                Vec::new()
            }
        }
    }

    fn read_stored(storage: &S) -> Result<Vec<GameRecord>> {
        let Some(contents) = storage
            .get_item(STORAGE_KEY)
            .map_err(|e| Error::StorageRead(e.to_string()))?
        else {
            return Ok(Vec::new());
        };

        let entries: Vec<serde_json::Value> =
            serde_json::from_str(&contents).map_err(|e| Error::StorageRead(e.to_string()))?;

        // One unreadable entry must not cost the rest of the list
        let total = entries.len();
        let games: Vec<GameRecord> = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(game) => Some(game),
                Err(e) => {
                    log::warn!("Skipping unreadable stored game: {}", e);
                    None
                }
            })
            .collect();

        if games.len() < total {
            log::warn!("Loaded {} of {} stored game(s)", games.len(), total);
        }
        Ok(games)
    }

    /// Overwrite the stored entry with the whole collection
    pub fn persist(&mut self) -> Result<()> {
        let contents = serde_json::to_string(&self.games)?;
        self.storage.set_item(STORAGE_KEY, &contents)
    }

    pub fn origin(&self) -> LoadOrigin {
        self.origin
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn exists(&self, id: &GameId) -> bool {
        self.games.iter().any(|g| &g.id == id)
    }

    pub fn get(&self, id: &GameId) -> Option<&GameRecord> {
        self.games.iter().find(|g| &g.id == id)
    }

    /// Map typed-in id text to a stored id. An exact textual match wins, so
    /// `"007"` finds a text id `"007"` rather than the number 7.
    pub fn resolve_id(&self, input: &str) -> Option<GameId> {
        let trimmed = input.trim();
        self.games
            .iter()
            .find(|g| g.id.to_string() == trimmed)
            .map(|g| g.id.clone())
            .or_else(|| GameId::parse(trimmed))
    }

    pub fn add(&mut self, id: &str, name: &str) -> Result<&GameRecord> {
        self.add_detailed(id, name, GameDetails::default())
    }

    pub fn add_detailed(&mut self, id: &str, name: &str, details: GameDetails) -> Result<&GameRecord> {
        let name = name.trim();
        let id = match GameId::parse(id) {
            Some(id) if !name.is_empty() => id,
            _ => {
                return Err(Error::Validation(
                    "Enter both a game id and a name".to_string(),
                ))
            }
        };

        if self.exists(&id) {
            return Err(Error::Duplicate(id));
        }

        let record = GameRecord::new(id, name, timestamp()).with_details(details);
        self.games.push(record);

        if let Err(e) = self.persist() {
            self.games.pop();
            return Err(e);
        }

        let index = self.games.len() - 1;
        let added = &self.games[index];
        log::info!("Added game {} ({})", added.name, added.id);
        Ok(added)
    }

    /// Remove the first record with `id`. Unknown ids are a no-op and return `None`.
    pub fn delete(&mut self, id: &GameId) -> Result<Option<GameRecord>> {
        let Some(index) = self.games.iter().position(|g| &g.id == id) else {
            log::debug!("Delete of unknown game id {} ignored", id);
            return Ok(None);
        };

        let removed = self.games.remove(index);

        if let Err(e) = self.persist() {
            self.games.insert(index, removed);
            return Err(e);
        }

        log::info!("Deleted game {} ({})", removed.name, removed.id);
        Ok(Some(removed))
    }

    /// Pretty-printed JSON array of the whole collection
    pub fn export_document(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.games)?)
    }

    /// Write the export document to `path`, or to `path/roblox_games.json` when
    /// `path` is a directory.
    pub fn export_to_file(&self, path: &Path) -> Result<PathBuf> {
        let target = if path.is_dir() {
            path.join(EXPORT_FILE_NAME)
        } else {
            path.to_path_buf()
        };

        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&target, self.export_document()?)?;
        log::info!("Exported {} game(s) to {:?}", self.games.len(), target);
        Ok(target)
    }

    /// Append every record whose id is not already present, then persist once.
    pub fn import_from_document(&mut self, document: &str) -> Result<ImportSummary> {
        let incoming: Vec<GameRecord> = serde_json::from_str(document)
            .map_err(|e| Error::Import(format!("Invalid games document: {}", e)))?;

        let original_len = self.games.len();
        let mut summary = ImportSummary::default();

        for record in incoming {
            if self.exists(&record.id) {
                summary.skipped += 1;
            } else {
                self.games.push(record);
                summary.added += 1;
            }
        }

        if let Err(e) = self.persist() {
            self.games.truncate(original_len);
            return Err(e);
        }

        log::info!(
            "Imported games: {} added, {} skipped",
            summary.added,
            summary.skipped
        );
        Ok(summary)
    }

    pub fn import_from_file(&mut self, path: &Path) -> Result<ImportSummary> {
        let document = fs::read_to_string(path)?;
        self.import_from_document(&document)
    }

    /// Empty the collection and drop the stored entry
    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove_item(STORAGE_KEY)?;
        let removed = self.games.len();
        self.games.clear();
        log::info!("Cleared {} game(s)", removed);
        Ok(())
    }

    pub fn generate_lookup_code(&self) -> String {
        generate_lookup_code(&self.games)
    }

    pub fn view(&self) -> GameListView {
        GameListView::new(&self.games)
    }
}

fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Keep the first record for each id
fn dedup(games: Vec<GameRecord>) -> Vec<GameRecord> {
    let mut seen = HashSet::new();
    let total = games.len();
    let unique: Vec<GameRecord> = games
        .into_iter()
        .filter(|g| seen.insert(g.id.clone()))
        .collect();

    if unique.len() < total {
        log::warn!("Dropped {} record(s) with duplicate ids", total - unique.len());
    }

    unique
}
