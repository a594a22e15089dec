//! # rentroll_schedule: Monthly Rent Schedule Generation
//!
//! Business logic layer of the rentroll library: lease terms, reporting
//! windows, and the month-by-month rent schedule generator.
//!
//! This crate provides:
//! - [`LeaseTerms`] / [`LeaseTermsBuilder`]: Validated lease description
//!   and the pure vacancy, cadence, eligibility, and due-date policies
//! - [`ReportingWindow`]: Validated date span iterated as calendar months
//! - [`MonthlyRentRecord`]: One output row per month
//! - [`RentSchedule`]: The generator and the ordered record collection
//! - [`ScheduleError`]: The full validation and generation error taxonomy
//!
//! ## Design Principles
//!
//! - **Validation at the boundary**: a constructed `LeaseTerms` or
//!   `ReportingWindow` is always schedulable; generation itself cannot
//!   reject inputs
//! - **Explicit fold state**: the running rent baseline and elapsed-month
//!   counter are loop-carried locals, never shared mutable state
//! - **Builder pattern** for ergonomic lease construction with sensible
//!   defaults (no escalation)
//!
//! # Examples
//!
//! ```
//! use rentroll_schedule::{LeaseTermsBuilder, RentSchedule, ReportingWindow};
//! use rentroll_core::types::Date;
//! use rust_decimal::Decimal;
//!
//! let terms = LeaseTermsBuilder::new()
//!     .base_rent(Decimal::new(10000, 2)) // 100.00
//!     .start_date(Date::from_ymd(2023, 1, 1).unwrap())
//!     .due_day(1)
//!     .escalation_frequency(1)
//!     .escalation_rate(Decimal::new(1, 1)) // +10% monthly
//!     .build()
//!     .unwrap();
//!
//! let window = ReportingWindow::new(
//!     Date::from_ymd(2023, 1, 1).unwrap(),
//!     Date::from_ymd(2023, 3, 31).unwrap(),
//! ).unwrap();
//!
//! let schedule = RentSchedule::generate(&terms, &window).unwrap();
//! assert_eq!(schedule.len(), 3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod lease;
pub mod record;
pub mod schedule;
pub mod window;

pub use error::ScheduleError;
pub use lease::{LeaseTerms, LeaseTermsBuilder};
pub use record::MonthlyRentRecord;
pub use schedule::RentSchedule;
pub use window::ReportingWindow;
