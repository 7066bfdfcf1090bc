//! # tablebook-core: Pure Business Logic for Tablebook
//!
//! This crate holds the restaurant bookkeeping: table bookings per dining
//! session, order accumulation, bill computation and the end-of-day report.
//! Everything is in memory and synchronous; there is no I/O here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tablebook Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Presentation (apps/console)                      │   │
//! │  │    book ──► order ──► status ──► bill ──► report                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ typed calls                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ tablebook-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   menu    │  │   table   │  │ restaurant│  │   │
//! │  │   │   Money   │  │ MenuItem  │  │   Table   │  │ Restaurant│  │   │
//! │  │   │           │  │  Order    │  │  Session  │  │  Report   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`menu`] - The fixed menu catalog
//! - [`order`] - Per-session order of purchased units
//! - [`table`] - Sessions, payment methods and the per-table state machine
//! - [`restaurant`] - The five tables, booking/ordering entry points
//! - [`report`] - Report and status DTOs
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use tablebook_core::{Money, PaymentMethod, Restaurant, Session};
//!
//! let mut restaurant = Restaurant::new();
//! restaurant.book_table(1, "early").unwrap();
//! restaurant.place_order(1, "early", "Steak Diane", 2, 2).unwrap();
//!
//! let bill = restaurant
//!     .table_mut(1)
//!     .unwrap()
//!     .calculate_bill(Session::Early, PaymentMethod::Cash, Money::zero())
//!     .unwrap();
//! assert_eq!(bill.cents(), 9998);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod report;
pub mod restaurant;
pub mod table;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::{MenuCatalog, MenuItem};
pub use money::Money;
pub use order::Order;
pub use report::{HighestSpender, ItemPopularity, ReportIssue, SalesReport, TableStatus};
pub use restaurant::Restaurant;
pub use table::{PaymentMethod, Session, Table};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of tables in the dining room. Ids run from 1 to this value.
pub const TABLE_COUNT: u32 = 5;

/// Maximum diners seated at one table for one session.
pub const TABLE_CAPACITY: u32 = 8;

/// Credit card surcharge in basis points (1000 = 10%).
pub const CREDIT_CARD_SURCHARGE_BPS: u32 = 1000;

/// Maximum units of one item in a single order call.
///
/// Every unit is stored as its own order entry, so this also bounds how
/// much one call can grow an order.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// The two most expensive dishes. The kitchen fires these first.
pub const PRIORITY_ITEMS: [&str; 2] = ["Fresh Caught Lobster", "Steak Diane"];
