//! # Restaurant
//!
//! Entry point for the presentation layer. Owns the five tables and the
//! menu, validates raw input and delegates to the right [`Table`].
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Presentation              Restaurant                 Table             │
//! │  ────────────              ──────────                 ─────             │
//! │                                                                         │
//! │  book 2 early ──────────► book_table() ─ id ok? ───► book()            │
//! │                                                                         │
//! │  order 2 early "X" ─────► place_order() ─ session,   add_order()       │
//! │                                           item, id ─►                   │
//! │                                                                         │
//! │  status ────────────────► display_status() (read only)                 │
//! │                                                                         │
//! │  bill 2 early ──────────► table_mut(2) ────────────► calculate_bill()  │
//! │                                                                         │
//! │  report ────────────────► generate_report() ───────► calculate_bill()  │
//! │                                                      for every booked   │
//! │                                                      session            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::menu::MenuCatalog;
use crate::money::Money;
use crate::report::{HighestSpender, ItemPopularity, ReportIssue, SalesReport, TableStatus};
use crate::table::{PaymentMethod, Session, Table};
use crate::validation::validate_table_id;
use crate::TABLE_COUNT;

#[derive(Debug, Clone)]
pub struct Restaurant {
    tables: Vec<Table>,
    menu: MenuCatalog,
}

impl Restaurant {
    /// Opens the dining room: tables 1 through 5, all sessions free.
    pub fn new() -> Self {
        Restaurant {
            tables: (1..=TABLE_COUNT).map(Table::new).collect(),
            menu: MenuCatalog::load(),
        }
    }

    pub fn menu(&self) -> &MenuCatalog {
        &self.menu
    }

    /// Checked handle to a table.
    pub fn table(&self, table_id: u32) -> CoreResult<&Table> {
        validate_table_id(table_id)?;
        Ok(&self.tables[(table_id - 1) as usize])
    }

    /// Checked mutable handle to a table, used for billing.
    pub fn table_mut(&mut self, table_id: u32) -> CoreResult<&mut Table> {
        validate_table_id(table_id)?;
        Ok(&mut self.tables[(table_id - 1) as usize])
    }

    /// Books `session` ("early" or "late") on a table.
    ///
    /// ## Returns
    /// - `Err(InvalidTable)` if `table_id` is outside 1..=5
    /// - `Err(InvalidSession)` if the session text is unrecognized
    /// - `Err(AlreadyBooked)` if the session was booked before
    pub fn book_table(&mut self, table_id: u32, session: &str) -> CoreResult<()> {
        debug!(table_id, session, "book_table");

        let table = self.table_mut(table_id)?;
        let session: Session = session.parse()?;
        table.book(session)
    }

    /// Orders `quantity` units of a menu item for a booked session, seating
    /// `diners` more guests.
    ///
    /// ## Checks (in order)
    /// 1. Session text → `InvalidSession`
    /// 2. Item name (exact match) → `ItemNotFound`
    /// 3. Table id → `InvalidTable`
    /// 4. Table rules → `NotBooked`, `CapacityExceeded`, `InvalidQuantity`
    pub fn place_order(
        &mut self,
        table_id: u32,
        session: &str,
        item_name: &str,
        quantity: i64,
        diners: u32,
    ) -> CoreResult<()> {
        debug!(table_id, session, item = item_name, quantity, diners, "place_order");

        let session: Session = session.parse()?;
        let item = self
            .menu
            .lookup(item_name)
            .ok_or_else(|| CoreError::ItemNotFound(item_name.to_string()))?
            .clone();

        self.table_mut(table_id)?
            .add_order(session, &item, quantity, diners)
    }

    /// Convenience wrapper: resolves the table handle and calculates its bill
    /// from raw session text.
    pub fn calculate_bill(
        &mut self,
        table_id: u32,
        session: &str,
        payment_method: PaymentMethod,
        tip: Money,
    ) -> CoreResult<Money> {
        debug!(table_id, session, %payment_method, tip = tip.cents(), "calculate_bill");

        let session: Session = session.parse()?;
        self.table_mut(table_id)?
            .calculate_bill(session, payment_method, tip)
    }

    /// Booked/free state per session for every table.
    pub fn display_status(&self) -> Vec<TableStatus> {
        self.tables
            .iter()
            .map(|table| TableStatus {
                table_id: table.id(),
                early_booked: table.is_booked(Session::Early),
                late_booked: table.is_booked(Session::Late),
            })
            .collect()
    }

    /// Aggregates income, tips and item popularity over every booked
    /// session.
    ///
    /// Each booked session is billed in cash with a zero tip, which also
    /// stores a zero tip on it. Tips recorded by earlier bill calculations
    /// are therefore cleared, and `total_tips` sums the cleared values.
    ///
    /// A session that fails to bill is recorded in `issues` and skipped;
    /// the rest of the report is still produced.
    pub fn generate_report(&mut self) -> SalesReport {
        let mut total_income = Money::zero();
        let mut total_tips = Money::zero();
        let mut highest_spender: Option<HighestSpender> = None;
        let mut popularity: Vec<ItemPopularity> = Vec::new();
        let mut popularity_index: HashMap<String, usize> = HashMap::new();
        let mut issues = Vec::new();

        for table in &mut self.tables {
            for session in Session::ALL {
                if !table.is_booked(session) {
                    continue;
                }

                let bill =
                    match table.calculate_bill(session, PaymentMethod::default(), Money::zero()) {
                        Ok(bill) => bill,
                        Err(err) => {
                            warn!(table_id = table.id(), %session, error = %err, "Report skipped session");
                            issues.push(ReportIssue {
                                table_id: table.id(),
                                session,
                                message: err.to_string(),
                            });
                            continue;
                        }
                    };

                let Some(income) = total_income.checked_add(bill) else {
                    warn!(table_id = table.id(), %session, "Report income out of range");
                    issues.push(ReportIssue {
                        table_id: table.id(),
                        session,
                        message: "total income out of range".to_string(),
                    });
                    continue;
                };
                total_income = income;
                let best = highest_spender.map_or(Money::zero(), |h| h.amount);
                if bill > best {
                    highest_spender = Some(HighestSpender {
                        table_id: table.id(),
                        session,
                        amount: bill,
                    });
                }
                // Every booked session was just billed with a zero tip
                total_tips = total_tips
                    .checked_add(table.tip(session))
                    .unwrap_or(total_tips);

                for item in table.order(session).items() {
                    match popularity_index.get(&item.name) {
                        Some(&index) => popularity[index].count += 1,
                        None => {
                            popularity_index.insert(item.name.clone(), popularity.len());
                            popularity.push(ItemPopularity {
                                name: item.name.clone(),
                                count: 1,
                            });
                        }
                    }
                }
            }
        }

        // Stable: equal counts keep first-seen order
        popularity.sort_by(|a, b| b.count.cmp(&a.count));

        info!(
            total_income = total_income.cents(),
            total_tips = total_tips.cents(),
            items = popularity.len(),
            issues = issues.len(),
            "Report generated"
        );

        SalesReport {
            total_income,
            highest_spender,
            total_tips,
            item_popularity: popularity,
            issues,
            generated_at: Utc::now(),
        }
    }
}

impl Default for Restaurant {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
