//! Favorite repositories, persisted as one JSON array under a single key.

use crate::models::Repository;
use crate::storage::{KeyValueStore, StorageError};

/// Storage key holding the JSON array of favorite repositories.
pub const FAVORITES_KEY: &str = "favoriteRepos";

/// Owns the favorites list and its persistence.
///
/// The list is read once at construction and rewritten in full after every
/// mutation. Membership is decided by repository id.
pub struct FavoritesService {
    store: Box<dyn KeyValueStore>,
    favorites: Vec<Repository>,
}

impl FavoritesService {
    /// Open the store and load saved favorites.
    ///
    /// Missing or undecodable data starts an empty list; the failure is
    /// logged, not returned.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let mut service = Self {
            store,
            favorites: Vec::new(),
        };
        match service.load_favorites() {
            Ok(favorites) => {
                tracing::info!(count = favorites.len(), "Favorites loaded");
                service.favorites = favorites;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load favorites, starting empty");
            }
        }
        service
    }

    /// Read the persisted list without touching the in-memory one.
    pub fn load_favorites(&self) -> Result<Vec<Repository>, StorageError> {
        let Some(value) = self.store.get(FAVORITES_KEY)? else {
            return Ok(Vec::new());
        };
        serde_json::from_value(value).map_err(|e| StorageError::Decode {
            key: FAVORITES_KEY.to_string(),
            source: e,
        })
    }

    /// Write the whole in-memory list to the store.
    pub fn save_favorites(&mut self) -> Result<(), StorageError> {
        let value = serde_json::to_value(&self.favorites).map_err(StorageError::Encode)?;
        self.store.set(FAVORITES_KEY, value)
    }

    /// Remove `repo` if it is a favorite, otherwise append it, then persist.
    ///
    /// Returns whether `repo` is a favorite afterwards. The in-memory change
    /// is kept even when saving fails; the save error is returned.
    pub fn toggle_favorite(&mut self, repo: &Repository) -> Result<bool, StorageError> {
        let now_favorite = match self.favorites.iter().position(|r| r.id == repo.id) {
            Some(index) => {
                self.favorites.remove(index);
                false
            }
            None => {
                self.favorites.push(repo.clone());
                true
            }
        };

        if let Err(err) = self.save_favorites() {
            tracing::warn!(repo = %repo.name, error = %err, "Failed to save favorites");
            return Err(err);
        }
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, repo: &Repository) -> bool {
        self.favorites.iter().any(|r| r.id == repo.id)
    }

    pub fn favorites(&self) -> &[Repository] {
        &self.favorites
    }
}
