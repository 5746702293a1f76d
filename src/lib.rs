//! Tictac - noughts and crosses in the terminal.
//!
//! The game rules live in [`tictac_core`]; this crate adds a line-oriented
//! front end that forwards player input to the engine and renders what it
//! returns, plus configuration loading.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for default names, board display, and logging
//! - **Terminal**: name entry, command parsing, board rendering
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictac::{AppConfig, Session};
//!
//! let input = Cursor::new("Ada\nBob\n1\n4\n2\n5\n3\nq\n");
//! let mut session = Session::new(input, Vec::new(), AppConfig::default());
//! session.run().unwrap();
//! assert!(session.engine().unwrap().is_game_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod terminal;

// Crate-level exports - Configuration
pub use config::{
    AppConfig, ConfigError, DEFAULT_CONFIG_PATH, DisplayConfig, HighlightStyle, PlayerDefaults,
};

// Crate-level exports - Terminal front end
pub use terminal::{
    AdapterError, Command, HELP, Session, parse_command, render_board, result_line, turn_line,
};
