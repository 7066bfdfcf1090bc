//! # Report Types
//!
//! Read models returned to the presentation layer: the per-table booking
//! status and the end-of-day sales report. Both are plain data; they are
//! produced by [`Restaurant`](crate::Restaurant).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::table::Session;

// =============================================================================
// Table Status
// =============================================================================

/// Booked/free state of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TableStatus {
    pub table_id: u32,
    pub early_booked: bool,
    pub late_booked: bool,
}

/// "Table 1 - Early: Booked, Late: Free"
impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = |booked: bool| if booked { "Booked" } else { "Free" };
        write!(
            f,
            "Table {} - Early: {}, Late: {}",
            self.table_id,
            label(self.early_booked),
            label(self.late_booked)
        )
    }
}

// =============================================================================
// Sales Report
// =============================================================================

/// The booked table+session with the largest bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HighestSpender {
    pub table_id: u32,
    pub session: Session,
    pub amount: Money,
}

/// How many units of one item were ordered across all booked sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemPopularity {
    pub name: String,
    pub count: u64,
}

/// A table+session the report could not bill. The rest of the report is
/// still aggregated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReportIssue {
    pub table_id: u32,
    pub session: Session,
    pub message: String,
}

impl fmt::Display for ReportIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error processing table {}, session {}: {}",
            self.table_id, self.session, self.message
        )
    }
}

/// End-of-day aggregate over every booked session.
///
/// ## Layout
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │ total_income     sum of every computed bill  │
/// │ highest_spender  first table with max bill   │
/// │ total_tips       sum of stored tips          │
/// │ item_popularity  count desc, ties by first   │
/// │                  appearance                  │
/// │ issues           per-session billing errors  │
/// └──────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub total_income: Money,
    pub highest_spender: Option<HighestSpender>,
    pub total_tips: Money,
    pub item_popularity: Vec<ItemPopularity>,
    pub issues: Vec<ReportIssue>,
    #[ts(as = "String")]
    pub generated_at: DateTime<Utc>,
}
