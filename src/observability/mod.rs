//! Diagnostic logging setup.
//!
//! Wires the `tracing` macros used throughout the crate to a file-based
//! subscriber. Observability is best-effort; nothing here can fail the app.

pub mod init;

pub use init::init_tracing;
