//! Ladle: a themeable terminal recipe browser.
//!
//! Ladle is a keyboard-driven terminal application that provides:
//! - A fixed, embedded recipe catalog loaded at startup
//! - Live substring search and structured filtering over the catalog
//! - Persistent favorites and theme preference backed by JSON file storage
//! - A home screen of category tiles, quick links, and favorites
//! - A full-screen recipe modal with an optional keep-screen-awake toggle
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Storage Layer │
//! │ (ui/)         │   │ (catalog/)    │   │ (storage/)    │
//! │ - Rendering   │   │ - Recipe data │   │ - JSON I/O    │
//! │ - Theming     │   │ - Filtering   │   │ - Backend API │
//! │ - Components  │   │ - Sorting     │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Wake-lock stubs (platform/)                      │
//! │  - Error types (domain/error)                       │
//! │  - Recipe model (domain/recipe)                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Embedded recipe catalog and the filter engine
//! - [`domain`]: Core domain types (Recipe, errors)
//! - [`favorites`]: Favorite-recipe tracking over the storage layer
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`platform`]: Best-effort wake-lock hooks
//! - [`storage`]: JSON file persistence for user state
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: file-based tracing setup (internal)
//!
//! # Initialization Flow
//!
//! 1. **Startup** (`main.rs`):
//!    - Parse CLI arguments
//!    - Initialize tracing (best-effort)
//!    - Call [`initialize`] to build the [`AppState`]
//!    - Enter the terminal key loop
//!
//! 2. **Event Processing**:
//!    - Map key presses to [`Event`]s based on the input mode
//!    - Call [`handle_event`], execute returned [`Action`]s
//!    - Re-render when the handler says the UI changed
//!
//! # Examples
//!
//! ```rust
//! use ladle::{handle_event, initialize, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config)?;
//!
//! let (should_render, actions) = handle_event(&mut state, &Event::MoveDown)?;
//! // Execute actions, re-render if requested...
//! # Ok::<(), ladle::LadleError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Shared Storage Handle
//!
//! Favorites and the theme preference live in one JSON document, so the
//! favorites store and the state machine share an `Rc<RefCell<dyn Storage>>`
//! handle rather than each owning a backend.
//!
//! ## Best-Effort Persistence
//!
//! A missing, unreadable, or corrupt state file never prevents startup:
//! loads fall back to empty defaults and writes log a warning on failure
//! while keeping the in-memory state authoritative.
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models:
//! - Clear separation between state and display
//! - Enables easier testing and validation
//! - Pre-computes expensive operations (match highlighting, windowing)

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod favorites;
pub mod infrastructure;
pub mod platform;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, Screen, SearchFocus};
pub use catalog::Catalog;
pub use domain::{LadleError, Recipe, Result};
pub use ui::Theme;

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use storage::{JsonStorage, Storage};

/// Application configuration assembled from CLI arguments.
///
/// Every field is optional in spirit: [`Config::default`] yields a fully
/// working setup that persists under the platform data directory with the
/// saved (or default) theme.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Built-in theme name to use for this run.
    ///
    /// Overrides the persisted theme preference. Ignored if `theme_file` is
    /// set. Options: `dark`, `modern`, `halloween`, `christmas`, `spring`,
    /// `vintage`.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name` and the persisted preference. See
    /// [`ui::theme`] for the format.
    pub theme_file: Option<PathBuf>,

    /// Directory for the state file and log file.
    ///
    /// Defaults to the platform data directory
    /// (`~/.local/share/ladle` on Linux).
    pub data_dir: Option<PathBuf>,

    /// Tracing filter for the diagnostic log.
    ///
    /// `RUST_LOG` syntax. Default: `"info"`.
    pub log_level: Option<String>,

    /// Whether opening a recipe should request a screen wake-lock.
    pub keep_awake: bool,
}

/// Initializes the application from configuration.
///
/// Opens (or creates) the JSON state file, resolves the theme, loads the
/// embedded catalog, and assembles the [`AppState`].
///
/// # Theme Resolution
///
/// In precedence order:
/// 1. `config.theme_file` — custom TOML file; a parse failure falls back
///    to the default theme rather than aborting
/// 2. `config.theme_name` — built-in theme for this run
/// 3. The persisted preference from the state file
/// 4. The default theme
///
/// Unknown names at any step resolve to the default theme.
///
/// # Errors
///
/// Returns an error if the state file location cannot be prepared or the
/// embedded catalog fails to parse (a broken build, not a runtime fault).
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing ladle");

    let state_path = infrastructure::state_file(config.data_dir.as_ref());
    let storage: Rc<RefCell<dyn Storage>> = Rc::new(RefCell::new(JsonStorage::new(state_path)?));

    let theme = resolve_theme(config, &storage);
    tracing::debug!(theme = %theme.name, "theme resolved");

    let catalog = Catalog::load_embedded()?;
    tracing::debug!(recipe_count = catalog.recipes().len(), "catalog loaded");

    Ok(AppState::new(catalog, storage, theme, config.keep_awake))
}

fn resolve_theme(config: &Config, storage: &Rc<RefCell<dyn Storage>>) -> Theme {
    if let Some(path) = &config.theme_file {
        return Theme::from_file(path).unwrap_or_else(|e| {
            tracing::warn!(path = ?path, error = %e, "failed to load theme file, using default");
            Theme::default()
        });
    }

    if let Some(name) = &config.theme_name {
        return Theme::resolve(Some(name));
    }

    let persisted = match storage.borrow().load_theme() {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read persisted theme");
            None
        }
    };
    Theme::resolve(persisted.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> Config {
        Config {
            data_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        }
    }

    #[test]
    fn initialize_with_defaults_starts_on_home() {
        let dir = TempDir::new().unwrap();
        let state = initialize(&config_in(&dir)).unwrap();

        assert_eq!(state.screen, Screen::Home);
        assert_eq!(state.theme.name, "dark");
        assert!(!state.catalog.recipes().is_empty());
    }

    #[test]
    fn theme_name_override_wins() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.theme_name = Some("vintage".to_string());

        let state = initialize(&config).unwrap();
        assert_eq!(state.theme.name, "vintage");
    }

    #[test]
    fn persisted_theme_is_restored() {
        let dir = TempDir::new().unwrap();

        {
            let path = infrastructure::state_file(Some(&dir.path().to_path_buf()));
            let mut storage = JsonStorage::new(path).unwrap();
            storage.save_theme("spring").unwrap();
        }

        let state = initialize(&config_in(&dir)).unwrap();
        assert_eq!(state.theme.name, "spring");
    }

    #[test]
    fn unknown_theme_name_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.theme_name = Some("no-such-theme".to_string());

        let state = initialize(&config).unwrap();
        assert_eq!(state.theme.name, "dark");
    }

    #[test]
    fn missing_theme_file_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.theme_file = Some(dir.path().join("nope.toml"));

        let state = initialize(&config).unwrap();
        assert_eq!(state.theme.name, "dark");
    }
}
