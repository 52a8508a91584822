//! The user's favorite recipes.
//!
//! Favorites are a set of recipe ids owned by [`FavoritesStore`], layered on
//! a [`Storage`] backend. Every toggle persists immediately, but persistence
//! is best-effort: a write failure is logged and the in-memory set stays
//! authoritative for the rest of the session. A failed or empty load simply
//! starts the session with no favorites.
//!
//! Distinct from the catalog's curated `isFavorite` flag, which marks
//! author-recommended recipes and never changes at runtime.

use crate::storage::Storage;
use std::cell::RefCell;
use std::rc::Rc;

/// User-toggled favorites, persisted through a storage backend.
///
/// The backend handle is shared with the rest of the app (theme persistence
/// writes through the same file), hence the `Rc<RefCell<_>>`.
pub struct FavoritesStore {
    storage: Rc<RefCell<dyn Storage>>,

    /// Favorite recipe ids in toggle order.
    ids: Vec<String>,
}

impl FavoritesStore {
    /// Creates a store, loading any persisted favorites.
    ///
    /// Load failures degrade to an empty set; they never propagate.
    #[must_use]
    pub fn new(storage: Rc<RefCell<dyn Storage>>) -> Self {
        let ids = match storage.borrow().load_favorites() {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load favorites, starting empty");
                Vec::new()
            }
        };

        tracing::debug!(count = ids.len(), "favorites loaded");
        Self { storage, ids }
    }

    /// Whether `id` is currently a favorite.
    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    /// Flips the favorite state of `id` and persists the result.
    ///
    /// Returns the new state. A persistence failure is logged and swallowed;
    /// the in-memory set has already changed.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_favorite = if let Some(pos) = self.ids.iter().position(|f| f == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        };

        tracing::debug!(recipe_id = %id, favorite = now_favorite, "favorite toggled");

        if let Err(e) = self.storage.borrow_mut().save_favorites(&self.ids) {
            tracing::warn!(error = %e, "failed to persist favorites");
        }

        now_favorite
    }

    /// Number of favorites.
    #[must_use]
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Favorite ids in toggle order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LadleError, Result};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    struct MemoryStorage {
        favorites: Vec<String>,
    }

    impl Storage for MemoryStorage {
        fn load_favorites(&self) -> Result<Vec<String>> {
            Ok(self.favorites.clone())
        }

        fn save_favorites(&mut self, ids: &[String]) -> Result<()> {
            self.favorites = ids.to_vec();
            Ok(())
        }

        fn load_theme(&self) -> Result<Option<String>> {
            Ok(None)
        }

        fn save_theme(&mut self, _name: &str) -> Result<()> {
            Ok(())
        }
    }

    struct FailingStorage {
        write_attempted: Arc<AtomicBool>,
    }

    impl Storage for FailingStorage {
        fn load_favorites(&self) -> Result<Vec<String>> {
            Err(LadleError::Storage("disk on fire".to_string()))
        }

        fn save_favorites(&mut self, _ids: &[String]) -> Result<()> {
            self.write_attempted.store(true, Ordering::SeqCst);
            Err(LadleError::Storage("disk on fire".to_string()))
        }

        fn load_theme(&self) -> Result<Option<String>> {
            Ok(None)
        }

        fn save_theme(&mut self, _name: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn toggle_flips_state_and_count() {
        let mut store = FavoritesStore::new(Rc::new(RefCell::new(MemoryStorage { favorites: vec![] })));

        assert!(!store.is_favorite("soup"));
        assert!(store.toggle("soup"));
        assert!(store.is_favorite("soup"));
        assert_eq!(store.count(), 1);

        assert!(!store.toggle("soup"));
        assert!(!store.is_favorite("soup"));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn persisted_favorites_are_loaded() {
        let store = FavoritesStore::new(Rc::new(RefCell::new(MemoryStorage {
            favorites: vec!["a".to_string(), "b".to_string()],
        })));
        assert!(store.is_favorite("a"));
        assert!(store.is_favorite("b"));
        assert_eq!(store.ids(), ["a", "b"]);
    }

    #[test]
    fn load_failure_starts_empty() {
        let store = FavoritesStore::new(Rc::new(RefCell::new(FailingStorage {
            write_attempted: Arc::new(AtomicBool::new(false)),
        })));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn write_failure_keeps_in_memory_state() {
        let attempted = Arc::new(AtomicBool::new(false));
        let mut store = FavoritesStore::new(Rc::new(RefCell::new(FailingStorage {
            write_attempted: Arc::clone(&attempted),
        })));

        assert!(store.toggle("soup"));
        assert!(attempted.load(Ordering::SeqCst));
        assert!(store.is_favorite("soup"));
    }
}
