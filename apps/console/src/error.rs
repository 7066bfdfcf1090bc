//! # Console Error Type
//!
//! Unified error type for console commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tablebook> order 1 early "Steak Diane"                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  tokenize ── unterminated quote? ──► ConsoleError (INPUT_ERROR)         │
//! │         │                                                               │
//! │  clap parse ── bad argument? ─────► ConsoleError (INPUT_ERROR)          │
//! │         │                                                               │
//! │  Restaurant::place_order ── CoreError::NotBooked ──► ConsoleError       │
//! │         │                                             (BOOKING_ERROR)   │
//! │         ▼                                                               │
//! │  Error: Session not booked: table 1 has no early booking.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The message shown to the user is the core error's message, unchanged.

use serde::Serialize;
use tablebook_core::CoreError;

/// Error returned from console commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "BOOKING_ERROR",
///   "message": "Table 2 is already booked for the early session."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for console responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown table or menu item
    NotFound,

    /// Input validation failed (session, quantity, amounts)
    ValidationError,

    /// Booking state forbids the operation
    BookingError,

    /// Table capacity would be exceeded
    CapacityError,

    /// The command line could not be parsed
    InputError,

    /// Internal error (rendering)
    Internal,
}

impl ConsoleError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ConsoleError {
            code,
            message: message.into(),
        }
    }

    /// Creates an input error (tokenizer or argument parsing).
    pub fn input(message: impl Into<String>) -> Self {
        ConsoleError::new(ErrorCode::InputError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ConsoleError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to console errors, keeping the message verbatim.
impl From<CoreError> for ConsoleError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InvalidTable { .. } | CoreError::ItemNotFound(_) => ErrorCode::NotFound,
            CoreError::InvalidSession(_)
            | CoreError::InvalidQuantity { .. }
            | CoreError::Validation(_) => ErrorCode::ValidationError,
            CoreError::AlreadyBooked { .. } | CoreError::NotBooked { .. } => {
                ErrorCode::BookingError
            }
            CoreError::CapacityExceeded { .. } => ErrorCode::CapacityError,
        };

        ConsoleError::new(code, err.to_string())
    }
}

impl std::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ConsoleError {}
