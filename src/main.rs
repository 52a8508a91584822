//! Terminal wrapper and entry point.
//!
//! This module provides the thin integration layer between the Ladle library
//! and the terminal. It parses CLI arguments, owns the key-read loop, and
//! executes the actions the library's event handler emits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Terminal (console)    │
//! │  ┌──────────────────┐   │
//! │  │  Key loop (main) │   │  ← read_key, map to Event
//! │  └──────────────────┘   │
//! │          │              │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  AppState (lib)  │   │  ← handle_event, render
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Event Mapping
//!
//! Terminal keys are translated to library events based on the current input
//! mode; everything below the mapping is mode-agnostic.
//!
//! # Keybindings
//!
//! In normal mode:
//! - `j`/`Down`: Move down (scrolls the open recipe)
//! - `k`/`Up`: Move up
//! - `Enter`: Open the selected recipe / activate the tile under the cursor
//! - `Esc`: Dismiss modal / filter panel / return home
//! - `/`: Enter search mode
//! - `f`: Toggle favorite
//! - `F`: Open the filter panel (index screen)
//! - `c`: Clear structured filters
//! - `t`: Cycle to the next built-in theme
//! - `w`: Toggle keep-screen-awake
//! - `h`: Return to the home screen
//! - `q`: Quit
//!
//! In search mode (typing):
//! - Printable characters: extend the query (results update live)
//! - `Backspace`: shrink the query
//! - `Enter`: move focus to the results
//! - `Esc`: leave search and clear the query

#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use clap::Parser;
use console::{Key, Term};

use ladle::{
    handle_event, initialize, platform, Action, AppState, Config, Event, InputMode, Result,
    SearchFocus,
};

/// A themeable terminal recipe browser.
#[derive(Debug, Parser)]
#[command(name = "ladle", version, about)]
struct Cli {
    /// Built-in theme for this run (dark, modern, halloween, christmas,
    /// spring, vintage); overrides the saved preference
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Custom TOML theme file; takes precedence over --theme
    #[arg(long, value_name = "PATH")]
    theme_file: Option<PathBuf>,

    /// Directory for the state and log files
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Log filter for the diagnostic log (RUST_LOG syntax)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Request a screen wake-lock while a recipe is open
    #[arg(long)]
    keep_awake: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            theme_name: self.theme,
            theme_file: self.theme_file,
            data_dir: self.data_dir,
            log_level: self.log_level,
            keep_awake: self.keep_awake,
        }
    }
}

fn main() {
    let config = Cli::parse().into_config();
    ladle::observability::init_tracing(&config);

    let span = tracing::debug_span!("startup");
    let _guard = span.entered();

    if let Err(e) = run(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Builds the state, prepares the terminal, and runs the key loop.
///
/// The cursor and screen are restored on the way out even when the loop
/// errors.
fn run(config: &Config) -> Result<()> {
    let mut state = initialize(config)?;
    tracing::debug!("app state initialized");

    let term = Term::stdout();
    term.hide_cursor()?;

    let result = event_loop(&mut state, &term);

    let _ = term.show_cursor();
    let _ = term.clear_screen();
    result
}

fn event_loop(state: &mut AppState, term: &Term) -> Result<()> {
    render(state, term)?;

    loop {
        let key = term.read_key()?;
        let Some(event) = map_key(state, &key) else {
            continue;
        };

        let (should_render, actions) = handle_event(state, &event)?;

        for action in actions {
            if execute_action(action) {
                return Ok(());
            }
        }

        if should_render {
            render(state, term)?;
        }
    }
}

fn render(state: &AppState, term: &Term) -> Result<()> {
    let (rows, cols) = term.size();
    term.clear_screen()?;
    ladle::ui::render(state, rows as usize, cols as usize);
    Ok(())
}

/// Maps a terminal key to an application event.
///
/// Mode-sensitive: while the search bar has typing focus, printable
/// characters feed the query instead of triggering commands.
fn map_key(state: &AppState, key: &Key) -> Option<Event> {
    let typing = matches!(state.input_mode, InputMode::Search(SearchFocus::Typing));

    Some(match key {
        Key::ArrowDown => Event::MoveDown,
        Key::ArrowUp => Event::MoveUp,
        Key::Enter => {
            if typing {
                Event::FocusResults
            } else {
                Event::Select
            }
        }
        Key::Escape => {
            if typing {
                Event::ExitSearch
            } else {
                Event::Escape
            }
        }
        Key::Backspace => Event::Backspace,
        Key::Char(c) => return map_char(state, *c, typing),
        _ => return None,
    })
}

fn map_char(state: &AppState, c: char, typing: bool) -> Option<Event> {
    if typing {
        return Some(Event::Char(c));
    }

    Some(match c {
        'j' => Event::MoveDown,
        'k' => Event::MoveUp,
        '/' if !state.is_modal_open() => Event::SearchMode,
        'h' => Event::NavigateHome,
        'f' => Event::ToggleFavorite,
        'F' => Event::OpenFilters,
        'c' => Event::ClearFilters,
        't' => Event::CycleTheme,
        'w' => Event::ToggleKeepAwake,
        'q' => Event::Quit,
        _ => return None,
    })
}

/// Executes an action from event handling. Returns `true` to quit.
fn execute_action(action: Action) -> bool {
    match action {
        Action::Quit => {
            tracing::debug!("quit requested");
            true
        }
        Action::AcquireWakeLock => {
            platform::acquire_wake_lock();
            false
        }
        Action::ReleaseWakeLock => {
            platform::release_wake_lock();
            false
        }
    }
}
