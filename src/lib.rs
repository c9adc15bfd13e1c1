//! HangDev - guess the word before the stack overflows.
//!
//! This crate wires [`hangdev_core`] to the outside world.
//!
//! # Architecture
//!
//! - **Config**: `hangdev.toml`, every field defaulted
//! - **Store**: JSON file standing in for the game's key-value store
//! - **Theme**: light/dark, remembered in the same store
//! - **TUI**: ratatui front end reading derived values from the session
//! - **Commands**: one-shot `guess` / `new` / `status` against the saved game
//!
//! # Example
//!
//! ```no_run
//! use hangdev::{HangDevConfig, commands};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = HangDevConfig::load_or_default("hangdev.toml")?;
//! let mut session = commands::open_session(&config)?;
//! println!("{}", commands::guess(&mut session, "e")?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod commands;
mod config;
mod report;
mod store;
mod theme;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, HangDevConfig};

// Crate-level exports - Persistence
pub use store::{FileStore, StoreError};

// Crate-level exports - Presentation
pub use report::render_status;
pub use theme::{THEME_KEY, Theme};
