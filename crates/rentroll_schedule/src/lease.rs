//! Lease terms and the pure rent-change policies.

use rentroll_core::types::money::round_to_cents;
use rentroll_core::types::time::{Date, YearMonth};
use rentroll_core::types::DateError;
use rust_decimal::Decimal;

use super::error::ScheduleError;

/// Immutable description of a lease, validated at construction.
///
/// Carries the base monthly rent, the lease start date, the day-of-month
/// rent is due, and the escalation policy (frequency in months and signed
/// rate). A constructed `LeaseTerms` is always schedulable: the builder
/// rejects every input the generator cannot handle.
///
/// The four pure policies the schedule generator composes live here:
/// [`is_vacant_in`](LeaseTerms::is_vacant_in),
/// [`escalation_scheduled`](LeaseTerms::escalation_scheduled),
/// [`escalation_permitted`](LeaseTerms::escalation_permitted), and
/// [`due_date_in`](LeaseTerms::due_date_in).
///
/// # Examples
///
/// ```
/// use rentroll_schedule::LeaseTermsBuilder;
/// use rentroll_core::types::Date;
/// use rust_decimal::Decimal;
///
/// let terms = LeaseTermsBuilder::new()
///     .base_rent(Decimal::new(10000, 2)) // 100.00
///     .start_date(Date::from_ymd(2023, 1, 1).unwrap())
///     .due_day(1)
///     .escalation_frequency(1)
///     .escalation_rate(Decimal::new(1, 1)) // 0.1
///     .build()
///     .unwrap();
///
/// assert_eq!(terms.due_day(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaseTerms {
    /// Base monthly rent, non-negative.
    base_rent: Decimal,
    /// Date the tenancy begins.
    start_date: Date,
    /// Day of each month on which rent is due (1-31).
    due_day: u32,
    /// Months between escalation events; 0 disables escalation.
    escalation_frequency: u32,
    /// Signed escalation rate; positive raises rent, negative lowers it.
    escalation_rate: Decimal,
}

impl LeaseTerms {
    /// Returns the base monthly rent.
    #[inline]
    pub fn base_rent(&self) -> Decimal {
        self.base_rent
    }

    /// Returns the lease start date.
    #[inline]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the day of each month on which rent is due.
    #[inline]
    pub fn due_day(&self) -> u32 {
        self.due_day
    }

    /// Returns the escalation frequency in months (0 means never).
    #[inline]
    pub fn escalation_frequency(&self) -> u32 {
        self.escalation_frequency
    }

    /// Returns the signed escalation rate.
    #[inline]
    pub fn escalation_rate(&self) -> Decimal {
        self.escalation_rate
    }

    /// Returns the calendar month the lease starts in.
    #[inline]
    pub fn start_month(&self) -> YearMonth {
        self.start_date.year_month()
    }

    /// Determines whether the unit is vacant in the given month.
    ///
    /// Vacancy holds for every month strictly before the lease start
    /// month and never from the start month onward.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_schedule::LeaseTermsBuilder;
    /// use rentroll_core::types::{Date, YearMonth};
    /// use rust_decimal::Decimal;
    ///
    /// let terms = LeaseTermsBuilder::new()
    ///     .base_rent(Decimal::new(10000, 2))
    ///     .start_date(Date::from_ymd(2023, 2, 15).unwrap())
    ///     .due_day(15)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(terms.is_vacant_in(YearMonth::new(2023, 1).unwrap()));
    /// assert!(!terms.is_vacant_in(YearMonth::new(2023, 2).unwrap()));
    /// assert!(!terms.is_vacant_in(YearMonth::new(2023, 3).unwrap()));
    /// ```
    pub fn is_vacant_in(&self, month: YearMonth) -> bool {
        self.start_month() > month
    }

    /// Determines whether an escalation event is scheduled at the given
    /// elapsed-month count.
    ///
    /// The counter is 1-based from the first iterated month of the window.
    /// An event is scheduled when the counter is an exact multiple of the
    /// escalation frequency; frequency 0 disables escalation entirely.
    pub fn escalation_scheduled(&self, elapsed_months: u32) -> bool {
        self.escalation_frequency != 0 && elapsed_months % self.escalation_frequency == 0
    }

    /// Determines whether an escalation is permitted given the vacancy state.
    ///
    /// Rent may only rise while the unit is occupied and only fall while
    /// it is vacant.
    pub fn escalation_permitted(&self, vacant: bool) -> bool {
        (!vacant && self.escalation_rate > Decimal::ZERO)
            || (vacant && self.escalation_rate < Decimal::ZERO)
    }

    /// Applies one escalation step to the current rent.
    ///
    /// The escalated amount is rounded to cents immediately, and the
    /// rounded value is the baseline for subsequent months.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_schedule::LeaseTermsBuilder;
    /// use rentroll_core::types::Date;
    /// use rust_decimal::Decimal;
    ///
    /// let terms = LeaseTermsBuilder::new()
    ///     .base_rent(Decimal::new(10000, 2))
    ///     .start_date(Date::from_ymd(2023, 1, 1).unwrap())
    ///     .due_day(1)
    ///     .escalation_frequency(1)
    ///     .escalation_rate(Decimal::new(1, 1))
    ///     .build()
    ///     .unwrap();
    ///
    /// let escalated = terms.escalated_rent(Decimal::new(10000, 2));
    /// assert_eq!(escalated, Decimal::new(11000, 2)); // 110.00
    /// ```
    pub fn escalated_rent(&self, current_rent: Decimal) -> Decimal {
        round_to_cents(current_rent * (Decimal::ONE + self.escalation_rate))
    }

    /// Computes the rent due date for the given month.
    ///
    /// The lease start month uses the lease start date unmodified; every
    /// other month uses the due day clamped to the month's last valid day.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_schedule::LeaseTermsBuilder;
    /// use rentroll_core::types::{Date, YearMonth};
    /// use rust_decimal::Decimal;
    ///
    /// let terms = LeaseTermsBuilder::new()
    ///     .base_rent(Decimal::new(10000, 2))
    ///     .start_date(Date::from_ymd(2023, 1, 31).unwrap())
    ///     .due_day(31)
    ///     .build()
    ///     .unwrap();
    ///
    /// // February clamps day 31 to the 28th
    /// let feb = YearMonth::new(2023, 2).unwrap();
    /// assert_eq!(
    ///     terms.due_date_in(feb).unwrap(),
    ///     Date::from_ymd(2023, 2, 28).unwrap()
    /// );
    /// ```
    pub fn due_date_in(&self, month: YearMonth) -> Result<Date, DateError> {
        if month == self.start_month() {
            Ok(self.start_date)
        } else {
            Date::from_ymd(month.year(), month.month(), month.day_clamped(self.due_day))
        }
    }
}

/// Builder for constructing validated lease terms.
///
/// # Examples
///
/// ```
/// use rentroll_schedule::LeaseTermsBuilder;
/// use rentroll_core::types::Date;
/// use rust_decimal::Decimal;
///
/// // Escalation frequency and rate default to 0 (no escalation)
/// let terms = LeaseTermsBuilder::new()
///     .base_rent(Decimal::new(10000, 2))
///     .start_date(Date::from_ymd(2023, 2, 15).unwrap())
///     .due_day(15)
///     .build()
///     .unwrap();
///
/// assert_eq!(terms.escalation_frequency(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LeaseTermsBuilder {
    base_rent: Option<Decimal>,
    start_date: Option<Date>,
    due_day: Option<u32>,
    escalation_frequency: u32,
    escalation_rate: Decimal,
}

impl LeaseTermsBuilder {
    /// Creates a new builder with no escalation configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base monthly rent.
    pub fn base_rent(mut self, rent: Decimal) -> Self {
        self.base_rent = Some(rent);
        self
    }

    /// Sets the lease start date.
    pub fn start_date(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the day of each month on which rent is due.
    pub fn due_day(mut self, day: u32) -> Self {
        self.due_day = Some(day);
        self
    }

    /// Sets the escalation frequency in months. Zero disables escalation.
    pub fn escalation_frequency(mut self, months: u32) -> Self {
        self.escalation_frequency = months;
        self
    }

    /// Sets the signed escalation rate (e.g. 0.1 for +10%, -0.1 for -10%).
    pub fn escalation_rate(mut self, rate: Decimal) -> Self {
        self.escalation_rate = rate;
        self
    }

    /// Builds the lease terms.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Base rent, start date, or due day is missing
    /// - Due day is outside 1-31
    /// - Base rent is negative
    /// - Escalation rate is below -1
    /// - Due day differs from the lease start date's day-of-month
    pub fn build(self) -> Result<LeaseTerms, ScheduleError> {
        let base_rent = self
            .base_rent
            .ok_or(ScheduleError::MissingField { field: "base_rent" })?;
        let start_date = self.start_date.ok_or(ScheduleError::MissingField {
            field: "start_date",
        })?;
        let due_day = self
            .due_day
            .ok_or(ScheduleError::MissingField { field: "due_day" })?;

        if !(1..=31).contains(&due_day) {
            return Err(ScheduleError::InvalidDueDay { due_day });
        }

        if base_rent < Decimal::ZERO {
            return Err(ScheduleError::NegativeBaseRent { amount: base_rent });
        }

        if self.escalation_rate < -Decimal::ONE {
            return Err(ScheduleError::InvalidRate {
                rate: self.escalation_rate,
            });
        }

        if due_day != start_date.day() {
            return Err(ScheduleError::MismatchedDueDay {
                due_day,
                lease_start_day: start_date.day(),
            });
        }

        Ok(LeaseTerms {
            base_rent,
            start_date,
            due_day,
            escalation_frequency: self.escalation_frequency,
            escalation_rate: self.escalation_rate,
        })
    }
}
