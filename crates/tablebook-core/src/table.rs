//! # Tables and Sessions
//!
//! Each table is booked per dining session. The two sessions of one table
//! are independent: booking, diners, tip and order are tracked per session.
//!
//! ## Session State Machine
//! ```text
//! ┌──────────┐   book()    ┌──────────┐
//! │ Unbooked │ ──────────► │  Booked  │ ◄─┐ add_order() / calculate_bill()
//! └──────────┘             └──────────┘ ──┘
//!       │
//!       └── add_order() ──► NotBooked
//!
//! There is no way back to Unbooked (no cancellation).
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::menu::MenuItem;
use crate::money::Money;
use crate::order::Order;
use crate::validation::validate_tip;
use crate::{CREDIT_CARD_SURCHARGE_BPS, TABLE_CAPACITY};

// =============================================================================
// Session
// =============================================================================

/// A daily dining session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Session {
    Early,
    Late,
}

impl Session {
    /// Both sessions, in service order.
    pub const ALL: [Session; 2] = [Session::Early, Session::Late];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Session::Early => "early",
            Session::Late => "late",
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses exactly "early" or "late".
///
/// ```rust
/// use tablebook_core::{CoreError, Session};
///
/// assert_eq!("late".parse::<Session>(), Ok(Session::Late));
/// assert!(matches!("Late".parse::<Session>(), Err(CoreError::InvalidSession(_))));
/// assert!(matches!("noon".parse::<Session>(), Err(CoreError::InvalidSession(_))));
/// ```
impl FromStr for Session {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "early" => Ok(Session::Early),
            "late" => Ok(Session::Late),
            _ => Err(CoreError::InvalidSession(s.to_string())),
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the bill is settled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    /// Carries the card surcharge.
    CreditCard,
}

impl PaymentMethod {
    /// Maps free-text input to a payment method.
    ///
    /// Only the exact text "credit card" selects
    /// [`PaymentMethod::CreditCard`]; anything else is settled as cash,
    /// without surcharge.
    pub fn from_input(input: &str) -> Self {
        match input {
            "credit card" => PaymentMethod::CreditCard,
            "cash" | "" => PaymentMethod::Cash,
            other => {
                warn!(method = %other, "Unrecognized payment method, billing as cash");
                PaymentMethod::Cash
            }
        }
    }

    /// Surcharge in basis points added before the tip.
    pub const fn surcharge_bps(&self) -> u32 {
        match self {
            PaymentMethod::Cash => 0,
            PaymentMethod::CreditCard => CREDIT_CARD_SURCHARGE_BPS,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cash => f.write_str("cash"),
            PaymentMethod::CreditCard => f.write_str("credit card"),
        }
    }
}

// =============================================================================
// Table
// =============================================================================

/// Everything tracked for one table in one session.
#[derive(Debug, Clone, Default)]
struct SessionState {
    booked_at: Option<DateTime<Utc>>,
    diners: u32,
    tip: Money,
    order: Order,
}

impl SessionState {
    fn is_booked(&self) -> bool {
        self.booked_at.is_some()
    }
}

/// A table in the dining room.
///
/// ## Invariants
/// - Diners per session never exceed TABLE_CAPACITY (8)
/// - A session's order only gains items after the session is booked
#[derive(Debug, Clone)]
pub struct Table {
    id: u32,
    early: SessionState,
    late: SessionState,
}

impl Table {
    pub fn new(id: u32) -> Self {
        Table {
            id,
            early: SessionState::default(),
            late: SessionState::default(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    fn state(&self, session: Session) -> &SessionState {
        match session {
            Session::Early => &self.early,
            Session::Late => &self.late,
        }
    }

    fn state_mut(&mut self, session: Session) -> &mut SessionState {
        match session {
            Session::Early => &mut self.early,
            Session::Late => &mut self.late,
        }
    }

    pub fn is_booked(&self, session: Session) -> bool {
        self.state(session).is_booked()
    }

    /// When the session was booked, if it has been.
    pub fn booked_at(&self, session: Session) -> Option<DateTime<Utc>> {
        self.state(session).booked_at
    }

    pub fn diners(&self, session: Session) -> u32 {
        self.state(session).diners
    }

    /// The tip stored by the most recent bill calculation.
    pub fn tip(&self, session: Session) -> Money {
        self.state(session).tip
    }

    pub fn order(&self, session: Session) -> &Order {
        &self.state(session).order
    }

    /// Books the session.
    ///
    /// ## Returns
    /// - `Ok(())` on success
    /// - `Err(AlreadyBooked)` if the session was booked before
    pub fn book(&mut self, session: Session) -> CoreResult<()> {
        let table_id = self.id;
        let state = self.state_mut(session);

        if state.is_booked() {
            return Err(CoreError::AlreadyBooked { table_id, session });
        }

        state.booked_at = Some(Utc::now());
        info!(table_id, %session, "Session booked");
        Ok(())
    }

    /// Seats `diners` more guests and appends `quantity` units of `item`.
    ///
    /// ## Checks (in order)
    /// ```text
    /// booked? ── no ──► NotBooked
    ///    │
    /// seated + diners > 8? ── yes ──► CapacityExceeded
    ///    │
    /// quantity in 1..=999? ── no ──► InvalidQuantity
    ///    │
    /// append units, then count the diners
    /// ```
    /// Capacity is checked first, then the append checks the quantity, and
    /// only then is the diner count committed. A failed call changes
    /// nothing.
    pub fn add_order(
        &mut self,
        session: Session,
        item: &MenuItem,
        quantity: i64,
        diners: u32,
    ) -> CoreResult<()> {
        let table_id = self.id;
        let state = self.state_mut(session);

        if !state.is_booked() {
            return Err(CoreError::NotBooked { table_id, session });
        }

        let seated = state.diners;
        let total_diners = seated
            .checked_add(diners)
            .filter(|&total| total <= TABLE_CAPACITY);
        let Some(total_diners) = total_diners else {
            return Err(CoreError::CapacityExceeded {
                table_id,
                seated,
                requested: diners,
                capacity: TABLE_CAPACITY,
            });
        };

        state.order.append(item, quantity)?;
        state.diners = total_diners;

        info!(
            table_id,
            %session,
            item = %item.name,
            quantity,
            diners = total_diners,
            "Order placed"
        );
        Ok(())
    }

    /// Computes the bill for the session and records `tip` as its tip.
    ///
    /// `total = order total (+10% for credit card) + tip`
    ///
    /// The stored tip is overwritten on every successful call, so the last
    /// calculation wins. The report calls this with a zero tip.
    ///
    /// A bill that does not fit in [`Money`] fails with
    /// `ValidationError::OutOfRange` and leaves the stored tip untouched.
    ///
    /// ## Example
    /// ```rust
    /// use tablebook_core::{MenuItem, Money, PaymentMethod, Session, Table};
    ///
    /// let mut table = Table::new(1);
    /// table.book(Session::Late).unwrap();
    /// let dish = MenuItem::new("Special", Money::from_cents(10000));
    /// table.add_order(Session::Late, &dish, 1, 2).unwrap();
    ///
    /// let bill = table
    ///     .calculate_bill(Session::Late, PaymentMethod::CreditCard, Money::from_cents(500))
    ///     .unwrap();
    /// assert_eq!(bill.cents(), 11500); // £100.00 × 1.10 + £5.00
    /// assert_eq!(table.tip(Session::Late).cents(), 500);
    /// ```
    pub fn calculate_bill(
        &mut self,
        session: Session,
        payment_method: PaymentMethod,
        tip: Money,
    ) -> CoreResult<Money> {
        validate_tip(tip)?;

        let table_id = self.id;
        let state = self.state_mut(session);

        let out_of_range = || ValidationError::OutOfRange {
            field: "bill".to_string(),
            min: 0,
            max: i64::MAX,
        };
        let subtotal = state.order.total().ok_or_else(out_of_range)?;
        let bill = subtotal
            .apply_surcharge(payment_method.surcharge_bps())
            .and_then(|surcharged| surcharged.checked_add(tip))
            .ok_or_else(out_of_range)?;
        state.tip = tip;

        info!(
            table_id,
            %session,
            %payment_method,
            subtotal = subtotal.cents(),
            tip = tip.cents(),
            total = bill.cents(),
            "Bill calculated"
        );
        Ok(bill)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Table {}", self.id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(pence: i64) -> MenuItem {
        MenuItem::new("Dish", Money::from_cents(pence))
    }

    fn booked_table(session: Session) -> Table {
        let mut table = Table::new(1);
        table.book(session).unwrap();
        table
    }

    #[test]
    fn test_session_parse() {
        assert_eq!("early".parse::<Session>(), Ok(Session::Early));
        assert_eq!("late".parse::<Session>(), Ok(Session::Late));
        assert!("LATE".parse::<Session>().is_err());
        assert!(" early".parse::<Session>().is_err());
        assert_eq!(
            "lunch".parse::<Session>(),
            Err(CoreError::InvalidSession("lunch".to_string()))
        );
    }

    #[test]
    fn test_payment_method_from_input() {
        assert_eq!(PaymentMethod::from_input("cash"), PaymentMethod::Cash);
        assert_eq!(
            PaymentMethod::from_input("credit card"),
            PaymentMethod::CreditCard
        );
        assert_eq!(PaymentMethod::from_input("Credit Card"), PaymentMethod::Cash);
        assert_eq!(PaymentMethod::from_input("cheque"), PaymentMethod::Cash);
        assert_eq!(PaymentMethod::from_input(""), PaymentMethod::Cash);
    }

    #[test]
    fn test_book_twice_fails() {
        let mut table = Table::new(3);
        table.book(Session::Early).unwrap();

        assert_eq!(
            table.book(Session::Early),
            Err(CoreError::AlreadyBooked {
                table_id: 3,
                session: Session::Early
            })
        );
    }

    #[test]
    fn test_sessions_book_independently() {
        let mut table = Table::new(1);
        table.book(Session::Early).unwrap();
        assert!(!table.is_booked(Session::Late));

        table.book(Session::Late).unwrap();
        assert!(table.is_booked(Session::Early));
        assert!(table.is_booked(Session::Late));
        assert!(table.booked_at(Session::Late).is_some());
    }

    #[test]
    fn test_add_order_requires_booking() {
        let mut table = booked_table(Session::Early);

        let err = table
            .add_order(Session::Late, &dish(100), 1, 1)
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::NotBooked {
                table_id: 1,
                session: Session::Late
            }
        );
        assert!(table.order(Session::Late).is_empty());
    }

    #[test]
    fn test_capacity_exactly_eight_succeeds() {
        let mut table = booked_table(Session::Early);

        table.add_order(Session::Early, &dish(100), 1, 5).unwrap();
        table.add_order(Session::Early, &dish(100), 1, 3).unwrap();
        assert_eq!(table.diners(Session::Early), 8);
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut table = booked_table(Session::Early);
        table.add_order(Session::Early, &dish(100), 1, 6).unwrap();

        let err = table
            .add_order(Session::Early, &dish(100), 1, 3)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::CapacityExceeded {
                seated: 6,
                requested: 3,
                capacity: 8,
                ..
            }
        ));
        assert_eq!(table.diners(Session::Early), 6);
        assert_eq!(table.order(Session::Early).len(), 1);
    }

    #[test]
    fn test_capacity_is_per_session() {
        let mut table = Table::new(2);
        table.book(Session::Early).unwrap();
        table.book(Session::Late).unwrap();

        table.add_order(Session::Early, &dish(100), 1, 8).unwrap();
        table.add_order(Session::Late, &dish(100), 1, 8).unwrap();
    }

    #[test]
    fn test_invalid_quantity_leaves_diners_untouched() {
        let mut table = booked_table(Session::Late);

        let err = table
            .add_order(Session::Late, &dish(100), 0, 4)
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidQuantity { .. }));
        assert_eq!(table.diners(Session::Late), 0);
    }

    #[test]
    fn test_zero_diners_adds_items_only() {
        let mut table = booked_table(Session::Early);
        table.add_order(Session::Early, &dish(100), 1, 2).unwrap();
        table.add_order(Session::Early, &dish(100), 2, 0).unwrap();

        assert_eq!(table.diners(Session::Early), 2);
        assert_eq!(table.order(Session::Early).len(), 3);
    }

    #[test]
    fn test_cash_bill_adds_tip() {
        let mut table = booked_table(Session::Early);
        table.add_order(Session::Early, &dish(4999), 2, 2).unwrap();
        table.add_order(Session::Early, &dish(599), 1, 0).unwrap();

        let bill = table
            .calculate_bill(Session::Early, PaymentMethod::Cash, Money::from_cents(300))
            .unwrap();
        assert_eq!(bill.cents(), 10897);
    }

    #[test]
    fn test_credit_card_surcharge_applies_before_tip() {
        let mut table = booked_table(Session::Early);
        table.add_order(Session::Early, &dish(10000), 1, 1).unwrap();

        let bill = table
            .calculate_bill(
                Session::Early,
                PaymentMethod::CreditCard,
                Money::from_cents(500),
            )
            .unwrap();
        assert_eq!(bill.cents(), 11500);
    }

    #[test]
    fn test_last_bill_calculation_wins_tip() {
        let mut table = booked_table(Session::Early);

        table
            .calculate_bill(Session::Early, PaymentMethod::Cash, Money::from_cents(800))
            .unwrap();
        table
            .calculate_bill(Session::Early, PaymentMethod::Cash, Money::from_cents(200))
            .unwrap();
        assert_eq!(table.tip(Session::Early).cents(), 200);
    }

    #[test]
    fn test_negative_tip_rejected_and_not_stored() {
        let mut table = booked_table(Session::Early);
        table
            .calculate_bill(Session::Early, PaymentMethod::Cash, Money::from_cents(100))
            .unwrap();

        let err = table
            .calculate_bill(Session::Early, PaymentMethod::Cash, Money::from_cents(-1))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(table.tip(Session::Early).cents(), 100);
    }

    #[test]
    fn test_bill_out_of_range_is_rejected() {
        let mut table = booked_table(Session::Early);
        table.add_order(Session::Early, &dish(4999), 1, 1).unwrap();
        table
            .calculate_bill(Session::Early, PaymentMethod::Cash, Money::from_cents(300))
            .unwrap();

        let err = table
            .calculate_bill(Session::Early, PaymentMethod::Cash, Money::from_cents(i64::MAX))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { ref field, .. }) if field == "bill"
        ));
        assert_eq!(table.tip(Session::Early).cents(), 300);
    }

    #[test]
    fn test_order_total_out_of_range_is_rejected() {
        let mut table = booked_table(Session::Late);
        table
            .add_order(Session::Late, &dish(i64::MAX), 2, 1)
            .unwrap();

        let err = table
            .calculate_bill(Session::Late, PaymentMethod::Cash, Money::zero())
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Table::new(4).to_string(), "Table 4");
    }
}
