//! Persistence seam: the storage trait and the bundled implementations.
//!
//! The core never blocks on storage correctness; a failed write is logged
//! by the session and the in-memory state stays authoritative.

use std::cell::RefCell;
use std::convert::Infallible;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use crate::state::GameState;

/// Trait for abstracting save/load operations.
/// Platform-specific implementations should provide this.
pub trait GameStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist the whole game state under the backend's fixed key.
    ///
    /// # Errors
    ///
    /// Returns an error if the game state cannot be saved.
    fn save(&self, state: &GameState) -> Result<(), Self::Error>;

    /// Load the persisted game state, if any. An unreadable or invalid
    /// payload may be reported as `Ok(None)`; the caller substitutes a
    /// fresh state either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend itself is unavailable.
    fn load(&self) -> Result<Option<GameState>, Self::Error>;

    /// Remove the persisted state.
    ///
    /// # Errors
    ///
    /// Returns an error if the save cannot be deleted.
    fn clear(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// JSON-file storage for hosts with a filesystem.
///
/// Browser hosts implement [`GameStorage`] over their own key-value store
/// instead; this is the default backend everywhere else.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl GameStorage for FileStorage {
    type Error = StorageError;

    fn save(&self, state: &GameState) -> Result<(), Self::Error> {
        let payload = state.to_saved_json()?;
        fs::write(&self.path, payload)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<GameState>, Self::Error> {
        let payload = match fs::read_to_string(&self.path) {
            Ok(payload) => payload,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        // A corrupt save is not an error at this seam; the session falls
        // back to defaults.
        Ok(GameState::from_saved_json(&payload))
    }

    fn clear(&self) -> Result<(), Self::Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-process storage: keeps the save for the lifetime of the value.
/// Clones share the same slot. Useful for tests and for hosts without
/// durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<GameState>>>,
}

impl GameStorage for MemoryStorage {
    type Error = Infallible;

    fn save(&self, state: &GameState) -> Result<(), Self::Error> {
        *self.slot.borrow_mut() = Some(state.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<GameState>, Self::Error> {
        Ok(self.slot.borrow().clone())
    }

    fn clear(&self) -> Result<(), Self::Error> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips() {
        let storage = MemoryStorage::default();
        assert!(storage.load().unwrap().is_none());

        let state = GameState::new_game(42);
        storage.save(&state).unwrap();
        assert_eq!(storage.load().unwrap(), Some(state));

        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
    }
}
