//! # Billing Commands
//!
//! ## Bill Calculation
//! ```text
//! order subtotal ──► + 10% if "credit card" ──► + tip ──► bill
//!                      (rounded to the penny)
//! ```
//!
//! The tip is stored on the session. A later `report` resets it to zero.
//! A bill too large to represent is rejected instead of wrapping.

use tablebook_core::validation::parse_amount;
use tablebook_core::{CoreError, PaymentMethod, Session};
use tracing::debug;

use crate::error::ConsoleError;
use crate::state::AppState;

/// Calculates and records the bill for one session.
///
/// ## Output
/// ```text
/// Total bill for Table 1 for early session: £105.97
/// ```
pub fn calculate_bill(
    state: &mut AppState,
    table: u32,
    session: &str,
    payment: &str,
    tip: &str,
) -> Result<String, ConsoleError> {
    debug!(table, session, payment, tip, "bill command");

    let handle = state.restaurant.table_mut(table)?;
    let session: Session = session.parse()?;
    let tip = parse_amount("tip", tip).map_err(CoreError::from)?;

    let bill = handle.calculate_bill(session, PaymentMethod::from_input(payment), tip)?;

    Ok(format!(
        "Total bill for Table {} for {} session: {}",
        table,
        session,
        state.config.format_currency(bill)
    ))
}
