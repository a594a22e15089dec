//! Rent schedule error types.

use rentroll_core::types::{Date, DateError};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while building lease terms or generating a schedule.
///
/// All validation happens once at the construction boundary, before
/// iteration begins; nothing is retried or recovered internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Missing required field in builder.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Rent due day outside the valid 1-31 range.
    #[error("Invalid rent due day: {due_day} (must be 1-31)")]
    InvalidDueDay {
        /// The rejected due day.
        due_day: u32,
    },

    /// Base monthly rent below zero.
    #[error("Base monthly rent must not be negative, got {amount}")]
    NegativeBaseRent {
        /// The rejected rent amount.
        amount: Decimal,
    },

    /// Escalation rate below -1, which would drive rent negative.
    #[error("Escalation rate must be at least -1, got {rate}")]
    InvalidRate {
        /// The rejected escalation rate.
        rate: Decimal,
    },

    /// Rent due day differs from the lease start date's day-of-month.
    ///
    /// Schedules anchored on a due day other than the lease start day
    /// are an unsupported configuration and are rejected explicitly.
    #[error("Rent due day {due_day} does not match lease start day {lease_start_day}")]
    MismatchedDueDay {
        /// The configured due day.
        due_day: u32,
        /// The lease start date's day-of-month.
        lease_start_day: u32,
    },

    /// Window end date precedes the start date.
    #[error("Window end date {end} precedes start date {start}")]
    InvalidWindow {
        /// The window start date.
        start: Date,
        /// The window end date.
        end: Date,
    },

    /// Date construction failure propagated from the core layer.
    #[error("Date error: {0}")]
    Date(#[from] DateError),
}
