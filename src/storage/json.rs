//! JSON file-based storage backend.
//!
//! This module provides a simple, human-readable storage implementation using
//! JSON serialization. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes.
//!
//! Unreadable or malformed state files are treated as absent: the backend
//! starts from defaults rather than failing, so a corrupt file can never keep
//! the app from launching.

use crate::domain::error::{LadleError, Result};
use crate::storage::backend::Storage;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// JSON storage container format.
///
/// The top-level structure serialized to disk. Wraps favorites and theme in
/// a single versioned object for future extensibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Favorite recipe ids, in insertion order.
    #[serde(default)]
    favorites: Vec<String>,

    /// Selected theme name; `None` means never chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            favorites: Vec::new(),
            theme: None,
        }
    }
}

/// JSON file storage backend.
///
/// Stores favorites and the theme selection in a human-readable JSON file
/// with atomic writes. The entire dataset is kept in memory and persisted on
/// modifications.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "favorites": ["perfect-scrambled-eggs", "coconut-bars"],
///   "theme": "dark"
/// }
/// ```
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: StorageData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonStorage {
    /// Creates or opens a JSON storage backend.
    ///
    /// If the file exists and parses, loads existing data. A missing,
    /// unreadable, or malformed file yields empty defaults. Parent
    /// directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error only if parent directory creation fails; load
    /// failures degrade to defaults rather than erroring.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ladle::storage::JsonStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/tmp/ladle.json"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            match Self::load_from_file(&file_path) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!(error = %e, "state file unreadable, starting fresh");
                    StorageData::default()
                }
            }
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData::default()
        };

        tracing::debug!(
            favorite_count = data.favorites.len(),
            theme = ?data.theme,
            "storage initialized"
        );

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Loads storage data from a JSON file.
    fn load_from_file(path: &PathBuf) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| LadleError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            favorites = data.favorites.len(),
            "loaded storage data"
        );

        Ok(data)
    }

    /// Saves storage data to disk using atomic write.
    ///
    /// Writes to a temporary file first, then atomically renames it to the
    /// target path, so the file is never left in a corrupt state even if the
    /// process crashes mid-write.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write, or the rename
    /// fails.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving storage data");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| LadleError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!("storage saved successfully");
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn load_favorites(&self) -> Result<Vec<String>> {
        Ok(self.data.favorites.clone())
    }

    fn save_favorites(&mut self, ids: &[String]) -> Result<()> {
        let _span = tracing::debug_span!("json_save_favorites", count = ids.len()).entered();

        self.data.favorites = ids.to_vec();
        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!("favorites saved");
        Ok(())
    }

    fn load_theme(&self) -> Result<Option<String>> {
        Ok(self.data.theme.clone())
    }

    fn save_theme(&mut self, name: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_save_theme", theme = %name).entered();

        self.data.theme = Some(name.to_string());
        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!("theme saved");
        Ok(())
    }
}

impl Drop for JsonStorage {
    /// Ensures data is saved on drop, even if a save was skipped earlier.
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> JsonStorage {
        JsonStorage::new(dir.path().join("ladle.json")).unwrap()
    }

    #[test]
    fn fresh_storage_is_empty() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        assert!(storage.load_favorites().unwrap().is_empty());
        assert!(storage.load_theme().unwrap().is_none());
    }

    #[test]
    fn favorites_and_theme_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ladle.json");

        {
            let mut storage = JsonStorage::new(path.clone()).unwrap();
            storage
                .save_favorites(&["coconut-bars".to_string(), "beef-stew".to_string()])
                .unwrap();
            storage.save_theme("halloween").unwrap();
        }

        let storage = JsonStorage::new(path).unwrap();
        assert_eq!(
            storage.load_favorites().unwrap(),
            vec!["coconut-bars", "beef-stew"]
        );
        assert_eq!(storage.load_theme().unwrap().as_deref(), Some("halloween"));
    }

    #[test]
    fn malformed_file_degrades_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ladle.json");
        std::fs::write(&path, "{ not json !").unwrap();

        let storage = JsonStorage::new(path).unwrap();
        assert!(storage.load_favorites().unwrap().is_empty());
        assert!(storage.load_theme().unwrap().is_none());
    }

    #[test]
    fn parent_directories_are_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("ladle.json");
        let mut storage = JsonStorage::new(path.clone()).unwrap();
        storage.save_theme("dark").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn no_file_is_written_until_dirty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ladle.json");
        {
            let _storage = JsonStorage::new(path.clone()).unwrap();
        }
        assert!(!path.exists());
    }
}
