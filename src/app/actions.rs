//! Actions representing side effects to be executed by the binary shim.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input.
//! Actions bridge pure state transformations and effectful operations such as
//! exiting the event loop or touching the platform wake-lock.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The binary
//! executes these actions in sequence after each handled event.

/// Commands representing side effects to be executed outside the state layer.
///
/// Actions are produced by the event handler and executed by the binary's
/// event loop. They represent the boundary between pure state transformations
/// and effectful operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Exits the event loop and restores the terminal.
    Quit,

    /// Requests the platform keep the screen awake.
    ///
    /// Emitted when a recipe is opened with the keep-awake toggle on, so the
    /// display survives a long simmer. Best-effort; failure is invisible to
    /// the state layer.
    AcquireWakeLock,

    /// Releases a previously requested wake-lock.
    ///
    /// Emitted when the recipe closes or the keep-awake toggle turns off.
    /// Safe to execute without a matching acquire.
    ReleaseWakeLock,
}
