//! # Report Command
//!
//! Renders the end-of-day sales report as text or JSON.
//!
//! ```text
//! === Tablebook Restaurant Sales Report ===
//! Error processing table 3, session late: ...     (only if any failed)
//! Total Income: £155.96
//! Highest Spending Table: Table 1 with £105.97
//! Total Tips: £0.00
//! Item Popularity:
//! Steak Diane: 3 orders
//! Coffee and biscuits: 1 orders
//! ```
//!
//! Generating a report re-bills every booked session in cash with no tip,
//! so it changes state and needs `&mut AppState`.

use tablebook_core::SalesReport;
use tracing::debug;

use crate::error::ConsoleError;
use crate::state::{AppState, ConfigState};

pub fn generate_report(state: &mut AppState, json: bool) -> Result<String, ConsoleError> {
    debug!(json, "report command");

    let report = state.restaurant.generate_report();

    if json {
        return serde_json::to_string_pretty(&report)
            .map_err(|e| ConsoleError::internal(format!("Failed to render report: {}", e)));
    }

    Ok(render_text(&report, &state.config))
}

fn render_text(report: &SalesReport, config: &ConfigState) -> String {
    let mut lines = vec![format!("=== {} Sales Report ===", config.restaurant_name)];

    lines.extend(report.issues.iter().map(ToString::to_string));

    lines.push(format!(
        "Total Income: {}",
        config.format_currency(report.total_income)
    ));
    if let Some(highest) = &report.highest_spender {
        lines.push(format!(
            "Highest Spending Table: Table {} with {}",
            highest.table_id,
            config.format_currency(highest.amount)
        ));
    }
    lines.push(format!(
        "Total Tips: {}",
        config.format_currency(report.total_tips)
    ));

    lines.push("Item Popularity:".to_string());
    lines.extend(
        report
            .item_popularity
            .iter()
            .map(|entry| format!("{}: {} orders", entry.name, entry.count)),
    );

    lines.join("\n")
}
