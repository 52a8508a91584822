//! Data directory resolution.
//!
//! This module locates the per-user data directory that holds the persisted
//! state file and the log file, following the platform convention via the
//! `directories` crate (`~/.local/share/ladle` on Linux).

use directories::ProjectDirs;
use std::path::PathBuf;

/// Name of the persisted user-state file within the data directory.
pub const STATE_FILE: &str = "ladle.json";

/// Name of the diagnostic log file within the data directory.
pub const LOG_FILE: &str = "ladle.log";

/// Returns the data directory for persisted state and logs.
///
/// Uses the platform-standard per-user data location. Falls back to the
/// current directory when no home directory can be determined (degraded
/// environments such as bare containers).
#[must_use]
pub fn data_dir() -> PathBuf {
    ProjectDirs::from("", "", "ladle").map_or_else(
        || PathBuf::from("."),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

/// Resolves the state file path, honoring an optional directory override.
#[must_use]
pub fn state_file(dir_override: Option<&PathBuf>) -> PathBuf {
    dir_override
        .cloned()
        .unwrap_or_else(data_dir)
        .join(STATE_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_takes_precedence() {
        let dir = PathBuf::from("/tmp/elsewhere");
        assert_eq!(
            state_file(Some(&dir)),
            PathBuf::from("/tmp/elsewhere/ladle.json")
        );
    }

    #[test]
    fn default_path_ends_with_state_file() {
        assert!(state_file(None).ends_with(STATE_FILE));
    }
}
