//! # Error Types
//!
//! Domain-specific error types for tablebook-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tablebook-core errors (this file)                                     │
//! │  ├── CoreError        - Booking, ordering and billing rule failures    │
//! │  └── ValidationError  - Input shape failures (money text, tips)        │
//! │                                                                         │
//! │  console errors (in app)                                               │
//! │  └── ConsoleError     - What the terminal user sees (code + message)   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ConsoleError → Terminal           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure is terminal for the requested operation. Nothing here is
//! retried: the caller shows the message and the user tries again.

use thiserror::Error;

use crate::table::Session;

// =============================================================================
// Core Error
// =============================================================================

/// Core business rule errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Table id outside `1..=TABLE_COUNT`.
    #[error("Invalid table number {table_id}. Must be between 1 and {max}.")]
    InvalidTable { table_id: u32, max: u32 },

    /// Session key other than "early" or "late".
    #[error("Invalid session '{0}'. Use 'early' or 'late'.")]
    InvalidSession(String),

    /// The session was booked earlier. There is no cancellation.
    #[error("Table {table_id} is already booked for the {session} session.")]
    AlreadyBooked { table_id: u32, session: Session },

    /// Orders can only be taken for a booked session.
    ///
    /// ## User Workflow
    /// ```text
    /// order 3 late "Floating Island"
    ///      │
    ///      ▼
    /// Table 3 / late booked?  ── no ──► NotBooked { table_id: 3, session: Late }
    ///      │
    ///     yes
    ///      ▼
    /// capacity check, append
    /// ```
    #[error("Session not booked: table {table_id} has no {session} booking.")]
    NotBooked { table_id: u32, session: Session },

    /// Seating the new diners would exceed the table capacity.
    #[error(
        "Exceeds table capacity of {capacity} diners: table {table_id} seats {seated}, {requested} more requested."
    )]
    CapacityExceeded {
        table_id: u32,
        seated: u32,
        requested: u32,
        capacity: u32,
    },

    /// Item name does not match any menu entry exactly.
    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    /// Quantity below one, or above the per-call maximum.
    #[error("Quantity must be between 1 and {max}, got {requested}.")]
    InvalidQuantity { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while turning raw input (tip text, amounts) into typed values,
/// before any business rule runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Amount must not be below zero.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., "12.3.4" as an amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
