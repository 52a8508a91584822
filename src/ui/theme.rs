//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system, supporting both built-in
//! themes and custom themes loaded from TOML files. It provides utilities for
//! converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `dark`: muted dark palette (default)
//! - `modern`: clean light palette
//! - `halloween`: orange on near-black
//! - `christmas`: red and green on cream
//! - `spring`: fresh greens
//! - `vintage`: warm sepia tones
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e8e3d3"
//! selection_fg = "#1c1917"
//! selection_bg = "#d97706"
//! text_normal = "#e8e3d3"
//! text_dim = "#78716c"
//! border = "#44403c"
//! accent = "#d97706"
//! match_highlight_fg = "#1c1917"
//! match_highlight_bg = "#fbbf24"
//! favorite_fg = "#f87171"
//! empty_state_fg = "#a8a29e"
//! ```

use crate::domain::{LadleError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when nothing valid is persisted.
pub const DEFAULT_THEME: &str = "dark";

/// Built-in theme names, in the order the theme cycler visits them.
pub const BUILTIN_THEMES: [&str; 6] = [
    "dark",
    "modern",
    "halloween",
    "christmas",
    "spring",
    "vintage",
];

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from built-in
/// themes or custom TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Theme name; for built-ins this matches the lookup key.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#e8e3d3"). Optional fields
/// default to `None`, allowing themes to opt out of certain styling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Accent color for badges, category labels, and the search bar.
    pub accent: String,

    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Favorite marker color.
    pub favorite_fg: String,

    /// Empty state message color.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is not one of [`BUILTIN_THEMES`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "dark" => include_str!("../../themes/dark.toml"),
            "modern" => include_str!("../../themes/modern.toml"),
            "halloween" => include_str!("../../themes/halloween.toml"),
            "christmas" => include_str!("../../themes/christmas.toml"),
            "spring" => include_str!("../../themes/spring.toml"),
            "vintage" => include_str!("../../themes/vintage.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Resolves a persisted theme name, falling back to the default.
    ///
    /// Unknown or missing names yield the default theme silently; a stale
    /// preference must never prevent startup.
    #[must_use]
    pub fn resolve(name: Option<&str>) -> Self {
        match name {
            Some(name) => Self::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme = %name, "unknown theme, using default");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// The built-in theme following this one in cycle order.
    ///
    /// Cycling from a custom (file-loaded) theme enters the built-in ring at
    /// its start.
    #[must_use]
    pub fn next_builtin(&self) -> Self {
        let next_name = BUILTIN_THEMES
            .iter()
            .position(|n| *n == self.name)
            .map_or(BUILTIN_THEMES[0], |i| {
                BUILTIN_THEMES[(i + 1) % BUILTIN_THEMES.len()]
            });

        Self::from_name(next_name).unwrap_or_default()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LadleError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed (invalid syntax, missing fields, type
    /// mismatches).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| LadleError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| LadleError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Strips `#` prefix if present, validates length, and parses hex digits.
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in default theme fails to parse (should never
    /// occur).
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("Built-in default theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_parses() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn unknown_name_resolves_to_default() {
        let theme = Theme::resolve(Some("solarized-disco"));
        assert_eq!(theme.name, DEFAULT_THEME);
        assert_eq!(Theme::resolve(None).name, DEFAULT_THEME);
    }

    #[test]
    fn cycling_visits_all_builtins_and_wraps() {
        let mut theme = Theme::default();
        let mut seen = vec![theme.name.clone()];
        for _ in 1..BUILTIN_THEMES.len() {
            theme = theme.next_builtin();
            seen.push(theme.name.clone());
        }
        assert_eq!(seen, BUILTIN_THEMES);
        assert_eq!(theme.next_builtin().name, BUILTIN_THEMES[0]);
    }

    #[test]
    fn from_file_loads_custom_themes_and_surfaces_theme_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");

        std::fs::write(&path, include_str!("../../themes/vintage.toml")).unwrap();
        assert_eq!(Theme::from_file(&path).unwrap().name, "vintage");

        let err = Theme::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, LadleError::Theme(_)));
        assert!(err.to_string().starts_with("Theme error"));

        std::fs::write(&path, "name = 3").unwrap();
        let err = Theme::from_file(&path).unwrap_err();
        assert!(matches!(err, LadleError::Theme(_)));
    }

    #[test]
    fn hex_colors_produce_truecolor_sequences() {
        assert_eq!(Theme::fg("#ff0000"), "\u{001b}[38;2;255;0;0m");
        assert_eq!(Theme::bg("00ff00"), "\u{001b}[48;2;0;255;0m");
        // Malformed hex degrades to white rather than panicking.
        assert_eq!(Theme::fg("nope"), "\u{001b}[38;2;255;255;255m");
    }
}
