//! Error types for Ladle.
//!
//! This module defines the centralized error type [`LadleError`] and a
//! [`Result`] alias used throughout the crate. All variants are implemented
//! with `thiserror` for automatic `Error` trait derivation.

use thiserror::Error;

/// The main error type for Ladle operations.
///
/// Consolidates every failure the application can surface: catalog loading,
/// persistence, and theme parsing. I/O errors convert automatically via
/// `#[from]`.
#[derive(Debug, Error)]
pub enum LadleError {
    /// Persistence operation failed.
    ///
    /// Raised when the local state file cannot be read, parsed, or written.
    /// Read-side failures are normally swallowed into defaults by the caller;
    /// this variant surfaces where propagation is appropriate.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The embedded recipe catalog is malformed.
    ///
    /// Only possible at startup; the catalog is static data compiled into the
    /// binary, so this indicates a broken build rather than a runtime fault.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for Ladle operations.
pub type Result<T> = std::result::Result<T, LadleError>;
