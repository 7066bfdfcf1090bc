//! # Booking Commands
//!
//! Reserving sessions and showing which tables are taken.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐   book    ┌──────────┐   order    ┌──────────┐    │
//! │  │   Free   │─────────►│  Booked  │──────────►│  Dining  │    │
//! │  └──────────┘           └──────────┘            └──────────┘    │
//! │                                                      │          │
//! │                                               bill / report     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A booking is never released within a run.

use tablebook_core::Session;
use tracing::debug;

use crate::error::ConsoleError;
use crate::state::AppState;

/// Books `session` on `table`.
///
/// ## Output
/// ```text
/// Table 3 booked for late session.
/// ```
pub fn book_table(state: &mut AppState, table: u32, session: &str) -> Result<String, ConsoleError> {
    debug!(table, session, "book command");

    state.restaurant.book_table(table, session)?;

    let session: Session = session.parse()?;
    Ok(format!("Table {} booked for {} session.", table, session))
}

/// One line per table, in table order.
///
/// ```text
/// Table 1 - Early: Booked, Late: Free
/// Table 2 - Early: Free, Late: Free
/// ```
pub fn display_status(state: &AppState) -> String {
    debug!("status command");

    state
        .restaurant
        .display_status()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
