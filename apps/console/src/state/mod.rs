//! # State Module
//!
//! Everything the console holds for the lifetime of the process.
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                    AppState                      │
//! │  ┌──────────────────┐   ┌─────────────────────┐  │
//! │  │   Restaurant     │   │    ConfigState      │  │
//! │  │  tables, menu    │   │  name, currency,    │  │
//! │  │  (mutated by     │   │  prompt             │  │
//! │  │   commands)      │   │  (read-only)        │  │
//! │  └──────────────────┘   └─────────────────────┘  │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! The run loop owns the one `AppState` and hands it to each command in
//! turn, so no locking is needed.

mod config;

pub use config::{ConfigError, ConfigState};

use tablebook_core::Restaurant;

#[derive(Debug)]
pub struct AppState {
    pub restaurant: Restaurant,
    pub config: ConfigState,
}

impl AppState {
    pub fn new(config: ConfigState) -> Self {
        AppState {
            restaurant: Restaurant::new(),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigState::default())
    }
}
