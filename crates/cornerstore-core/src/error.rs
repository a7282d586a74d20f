//! # Error Types
//!
//! Domain-specific error types for cornerstore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cornerstore-core (this file)                                          │
//! │  └── ValidationError  - Malformed input (dates, amounts)               │
//! │                                                                         │
//! │  cornerstore-db                                                        │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  apps/api                                                              │
//! │  └── ApiError         - What HTTP clients see                          │
//! │                                                                         │
//! │  Flow: ValidationError / DbError → ApiError → HTTP response            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Price, quantity and name contents are not validated anywhere; these
//! errors only cover input that cannot be interpreted at all.

use thiserror::Error;

/// Input that could not be interpreted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid format (e.g., unparseable date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value outside the representable range (e.g., the last calendar day).
    #[error("{field} is out of range: {value}")]
    OutOfRange { field: String, value: String },
}

impl ValidationError {
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
