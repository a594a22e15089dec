//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date and year-month construction and parsing

use thiserror::Error;

/// Date-related errors.
///
/// Provides structured error handling for date construction and parsing
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `InvalidMonth`: Month component outside 1-12
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use rentroll_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Month component outside the valid 1-12 range.
    #[error("Invalid month: {month} (must be 1-12)")]
    InvalidMonth {
        /// The rejected month value
        month: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}
