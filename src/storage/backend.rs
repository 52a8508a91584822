//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait that abstracts over different
//! persistence backends. The app only ever persists two small pieces of user
//! state: the favorites set and the selected theme name. Everything else
//! (the catalog, filter state, navigation) is in-memory only.
//!
//! # Design Philosophy
//!
//! The trait is minimal and focused on the actual operations the app needs,
//! not a generic key-value store. Persistence is best-effort: callers are
//! expected to log write failures and carry on with in-memory state.

use crate::domain::error::Result;

/// Abstraction over persistent user-state backends.
///
/// # Implementations
///
/// - [`JsonStorage`]: a single JSON file with atomic writes (default)
///
/// [`JsonStorage`]: crate::storage::JsonStorage
pub trait Storage {
    /// Retrieves the persisted favorite recipe ids.
    ///
    /// Returns an empty vector when nothing has been persisted yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn load_favorites(&self) -> Result<Vec<String>>;

    /// Replaces the persisted favorites with `ids`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn save_favorites(&mut self, ids: &[String]) -> Result<()>;

    /// Retrieves the persisted theme name, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn load_theme(&self) -> Result<Option<String>>;

    /// Persists the selected theme name.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn save_theme(&mut self, name: &str) -> Result<()>;
}
