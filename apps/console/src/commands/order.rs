//! # Order Commands
//!
//! Ordering dishes, printing the kitchen ticket, listing the menu.
//!
//! ## Kitchen Ticket
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  Table 2 (late session, booked 19:42, 3 diners)  │
//! │    - Fresh Caught Lobster                        │
//! │    - Steak Diane                                 │
//! │    - Bloc de Pate                                │
//! │    - Floating Island                             │
//! └──────────────────────────────────────────────────┘
//! ```
//! Lobster and Steak Diane go to the top; everything else keeps the order
//! it was placed in.

use tablebook_core::{CoreError, Session};
use tracing::debug;

use crate::error::ConsoleError;
use crate::state::AppState;

/// Adds `quantity` units of `item` to a booked session and seats `diners`
/// more people.
pub fn place_order(
    state: &mut AppState,
    table: u32,
    session: &str,
    item: &str,
    quantity: i64,
    diners: u32,
) -> Result<String, ConsoleError> {
    debug!(table, session, item, quantity, diners, "order command");

    state
        .restaurant
        .place_order(table, session, item, quantity, diners)?;

    let session: Session = session.parse()?;
    let seated = state.restaurant.table(table)?.diners(session);
    Ok(format!(
        "Order placed for Table {} for {} session: {} x {} ({} diners seated).",
        table, session, quantity, item, seated
    ))
}

/// Renders the order for one session, priority dishes first.
pub fn kitchen_ticket(state: &AppState, table: u32, session: &str) -> Result<String, ConsoleError> {
    debug!(table, session, "ticket command");

    let handle = state.restaurant.table(table)?;
    let session: Session = session.parse()?;

    let booked_at = handle
        .booked_at(session)
        .ok_or(CoreError::NotBooked {
            table_id: table,
            session,
        })?;

    let mut lines = vec![format!(
        "{} ({} session, booked {}, {} diners)",
        handle,
        session,
        booked_at.format("%H:%M"),
        handle.diners(session)
    )];

    let items = handle.order(session).prioritized();
    if items.is_empty() {
        lines.push("  (no items ordered)".to_string());
    }
    lines.extend(items.iter().map(|item| format!("  - {}", item.name)));

    Ok(lines.join("\n"))
}

/// Every menu item in menu order, priced with the configured currency.
pub fn show_menu(state: &AppState) -> String {
    debug!("menu command");

    state
        .restaurant
        .menu()
        .items()
        .map(|item| format!("{}: {}", item.name, state.config.format_currency(item.price)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn booked_state() -> AppState {
        let mut state = AppState::default();
        state.restaurant.book_table(2, "late").unwrap();
        state
    }

    #[test]
    fn test_place_order_message() {
        let mut state = booked_state();
        let text = place_order(&mut state, 2, "late", "Steak Diane", 2, 3).unwrap();
        assert_eq!(
            text,
            "Order placed for Table 2 for late session: 2 x Steak Diane (3 diners seated)."
        );
    }

    #[test]
    fn test_place_order_errors() {
        let mut state = booked_state();

        let err = place_order(&mut state, 2, "early", "Steak Diane", 1, 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingError);

        let err = place_order(&mut state, 2, "late", "Fish Fingers", 1, 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Menu item not found: Fish Fingers");

        let err = place_order(&mut state, 2, "late", "Steak Diane", 1, 9).unwrap_err();
        assert_eq!(err.code, ErrorCode::CapacityError);

        let err = place_order(&mut state, 2, "late", "Steak Diane", 0, 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_kitchen_ticket_priority_first() {
        let mut state = booked_state();
        place_order(&mut state, 2, "late", "Bloc de Pate", 1, 2).unwrap();
        place_order(&mut state, 2, "late", "Steak Diane", 1, 0).unwrap();
        place_order(&mut state, 2, "late", "Floating Island", 1, 0).unwrap();
        place_order(&mut state, 2, "late", "Fresh Caught Lobster", 1, 1).unwrap();

        let ticket = kitchen_ticket(&state, 2, "late").unwrap();
        let lines: Vec<&str> = ticket.lines().collect();

        assert!(lines[0].starts_with("Table 2 (late session, booked "));
        assert!(lines[0].ends_with(", 3 diners)"));
        assert_eq!(
            &lines[1..],
            &[
                "  - Steak Diane",
                "  - Fresh Caught Lobster",
                "  - Bloc de Pate",
                "  - Floating Island",
            ]
        );
    }

    #[test]
    fn test_kitchen_ticket_empty_and_unbooked() {
        let state = booked_state();

        let ticket = kitchen_ticket(&state, 2, "late").unwrap();
        assert!(ticket.ends_with("  (no items ordered)"));

        let err = kitchen_ticket(&state, 2, "early").unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingError);
    }

    #[test]
    fn test_show_menu() {
        let state = AppState::default();
        let menu = show_menu(&state);
        let lines: Vec<&str> = menu.lines().collect();

        assert_eq!(lines.len(), 17);
        assert_eq!(lines[0], "House Cured Bourbon Gravadlax: £9.99");
        assert_eq!(lines[16], "Coffee and biscuits: £5.99");
    }
}
