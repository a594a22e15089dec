//! Per-month output record of a rent schedule.

use rentroll_core::types::time::Date;
use rust_decimal::Decimal;
use std::fmt;

/// One month of a generated rent schedule.
///
/// Carries the vacancy state, the rent amount due that month, and the
/// normalised due date. Records are produced fresh per month and never
/// mutated after creation.
///
/// # Examples
///
/// ```
/// use rentroll_schedule::MonthlyRentRecord;
/// use rentroll_core::types::Date;
/// use rust_decimal::Decimal;
///
/// let record = MonthlyRentRecord::new(
///     false,
///     Decimal::new(11000, 2), // 110.00
///     Date::from_ymd(2023, 2, 1).unwrap(),
/// );
///
/// assert!(!record.vacancy());
/// assert_eq!(record.rent_amount(), Decimal::new(11000, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthlyRentRecord {
    /// Whether the unit is vacant this month.
    vacancy: bool,
    /// Rent amount due this month.
    rent_amount: Decimal,
    /// Date the rent is due, normalised for short months.
    rent_due_date: Date,
}

impl MonthlyRentRecord {
    /// Creates a new monthly rent record.
    ///
    /// # Arguments
    ///
    /// * `vacancy` - Whether the unit is vacant this month
    /// * `rent_amount` - Rent amount due this month
    /// * `rent_due_date` - Date the rent is due
    #[inline]
    pub fn new(vacancy: bool, rent_amount: Decimal, rent_due_date: Date) -> Self {
        Self {
            vacancy,
            rent_amount,
            rent_due_date,
        }
    }

    /// Returns whether the unit is vacant this month.
    #[inline]
    pub fn vacancy(&self) -> bool {
        self.vacancy
    }

    /// Returns the rent amount due this month.
    #[inline]
    pub fn rent_amount(&self) -> Decimal {
        self.rent_amount
    }

    /// Returns the date the rent is due.
    #[inline]
    pub fn rent_due_date(&self) -> Date {
        self.rent_due_date
    }
}

impl fmt::Display for MonthlyRentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rent {} due {} ({})",
            self.rent_amount,
            self.rent_due_date,
            if self.vacancy { "vacant" } else { "occupied" }
        )
    }
}
