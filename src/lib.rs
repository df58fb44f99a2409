//! Two-player tic-tac-toe front ends.
//!
//! The game logic lives in [`tictactoe_core`]; this crate adds configuration
//! and two presenters for it.
//!
//! # Architecture
//!
//! - **Console**: prints the board and reads one command per line
//! - **TUI**: ratatui setup and game views driven by keyboard and mouse
//! - **Config**: optional TOML file with player names and reset behaviour
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe::{GameConfig, run_console};
//!
//! let input = Cursor::new("Ada\nGrace\n1\n4\n2\n5\n3\nn\n");
//! let output = run_console(input, Vec::new(), &GameConfig::default()).unwrap();
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.contains("Ada wins!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod tui;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
pub use console::{ConsoleCommand, ConsolePresenter, run_console};
pub use tui::{App, NameField, Screen, run_tui};
