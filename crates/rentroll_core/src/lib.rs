//! # rentroll_core: Calendar Foundation for the Rentroll Library
//!
//! ## Layer 1 (Foundation) Role
//!
//! rentroll_core serves as the bottom layer of the two-layer architecture, providing:
//! - Calendar types: `Date`, `YearMonth` (`types::time`)
//! - Gregorian helpers: `is_leap_year`, `days_in_month` (`types::time`)
//! - Monetary rounding: `round_to_cents` (`types::money`)
//! - Error types: `DateError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other rentroll_* crates, with minimal external dependencies:
//! - chrono: Date arithmetic
//! - rust_decimal: Exact decimal currency amounts
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use rentroll_core::types::{round_to_cents, Date, YearMonth};
//! use rust_decimal::Decimal;
//!
//! // Date operations
//! let lease_start = Date::from_ymd(2023, 1, 31).unwrap();
//! let feb = YearMonth::new(2023, 2).unwrap();
//!
//! // Due-date normalisation: day 31 clamps to February's last day
//! assert_eq!(feb.day_clamped(lease_start.day()), 28);
//!
//! // Currency rounding after an escalation step
//! let escalated = round_to_cents(Decimal::new(10000, 2) * Decimal::new(11, 1));
//! assert_eq!(escalated, Decimal::new(11000, 2));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date and YearMonth

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
