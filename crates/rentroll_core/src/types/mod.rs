//! Core calendar and monetary types.
//!
//! This module provides:
//! - `time`: Calendar types (Date, YearMonth) and Gregorian helpers for rent calculations
//! - `money`: Two-decimal currency rounding
//! - `error`: Structured error types for date and year-month operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`YearMonth`], [`is_leap_year`], [`days_in_month`] from `time`
//! - [`round_to_cents`] from `money`
//! - [`DateError`] from `error`

pub mod error;
pub mod money;
pub mod time;

// Re-export commonly used types at module level
pub use error::DateError;
pub use money::round_to_cents;
pub use time::{days_in_month, is_leap_year, Date, YearMonth};
