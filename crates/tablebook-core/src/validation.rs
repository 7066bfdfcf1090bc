//! # Validation Module
//!
//! Input validation utilities for Tablebook.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console (apps/console)                                       │
//! │  ├── Tokenizing, clap argument types (table id is a number)            │
//! │  └── Immediate usage messages                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Table id range, quantity range                                    │
//! │  └── Money text parsing, tip sign                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Table state machine                                          │
//! │  └── Booked?, capacity                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tablebook_core::validation::{validate_quantity, validate_table_id};
//!
//! assert!(validate_table_id(3).is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::{MAX_ITEM_QUANTITY, TABLE_COUNT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a table id against the fixed dining room.
///
/// ## Rules
/// - Must be between 1 and TABLE_COUNT (5), inclusive
pub fn validate_table_id(table_id: u32) -> CoreResult<()> {
    if table_id < 1 || table_id > TABLE_COUNT {
        return Err(CoreError::InvalidTable {
            table_id,
            max: TABLE_COUNT,
        });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be at least 1
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> CoreResult<()> {
    if !(1..=MAX_ITEM_QUANTITY).contains(&qty) {
        return Err(CoreError::InvalidQuantity {
            requested: qty,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a tip amount. Zero is allowed.
pub fn validate_tip(tip: Money) -> ValidationResult<()> {
    if tip.is_negative() {
        return Err(ValidationError::Negative {
            field: "tip".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Text Parsers
// =============================================================================

/// Parses decimal currency text into pence.
///
/// ## Rules
/// - Surrounding whitespace and a leading "£" are ignored
/// - An optional leading "-" is kept (callers decide if it is allowed)
/// - At most two fractional digits: "5", "5.5", "5.50"
///
/// ## Example
/// ```rust
/// use tablebook_core::validation::parse_amount;
///
/// assert_eq!(parse_amount("tip", "£2.5").unwrap().cents(), 250);
/// assert!(parse_amount("tip", "").is_err());
/// assert!(parse_amount("tip", "1.999").is_err());
/// ```
pub fn parse_amount(field: &str, text: &str) -> ValidationResult<Money> {
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let unsigned = unsigned.strip_prefix('£').unwrap_or(unsigned);

    if unsigned.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: reason.to_string(),
    };

    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("expected a decimal amount such as 12.50"));
    }
    if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("at most two digits after the decimal point"));
    }

    let out_of_range = || ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: i64::MAX / 100,
    };

    let pounds: i64 = whole.parse().map_err(|_| out_of_range())?;
    let pence: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| out_of_range())? * 10,
        _ => fraction.parse().map_err(|_| out_of_range())?,
    };

    let cents = pounds
        .checked_mul(100)
        .and_then(|c| c.checked_add(pence))
        .ok_or_else(out_of_range)?;

    Ok(Money::from_cents(if negative { -cents } else { cents }))
}

// =============================================================================
// Unit Tests
// =============================================================================
