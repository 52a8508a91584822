//! Storage layer for persistent user state.
//!
//! This module provides the storage abstraction for persisting the favorites
//! set and the selected theme. It uses a single JSON file with atomic writes.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation

pub mod backend;
pub mod json;

pub use backend::Storage;
pub use json::JsonStorage;
