//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components.
//!
//! The renderer follows a two-step process: transform `AppState` into a
//! `UIViewModel`, then hand the view model to the frame renderer. Nothing in
//! the components layer reads application state directly.

use crate::app::AppState;
use crate::ui::components;

/// Renders the application UI to stdout.
///
/// Computes the view model from application state and draws one full frame.
/// Prints ANSI-styled output using absolute cursor positioning; does not
/// clear the screen (the caller owns terminal setup and teardown).
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_frame(&viewmodel, &state.theme, cols, rows);
}
