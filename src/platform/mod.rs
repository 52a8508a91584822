//! Platform capabilities: the screen wake-lock.
//!
//! Keeping the screen awake while a recipe is open is a nicety, not a
//! requirement, and terminals offer no portable API for it. The functions
//! here are therefore best-effort no-ops that never fail the caller; they
//! exist so the action boundary is real and a platform-specific
//! implementation can slot in without touching the state layer.

/// Requests that the display stay awake.
///
/// Best-effort: on platforms without a wake-lock capability this logs and
/// returns. Never fails.
pub fn acquire_wake_lock() {
    tracing::debug!("wake-lock requested (no platform backend, ignoring)");
}

/// Releases a previously requested wake-lock.
///
/// Safe to call without a matching acquire.
pub fn release_wake_lock() {
    tracing::debug!("wake-lock released");
}
