//! Reporting window over which a schedule is generated.

use rentroll_core::types::time::{Date, YearMonth};

use super::error::ScheduleError;

/// The caller-specified span of calendar dates for which a schedule
/// is requested.
///
/// The generator consults the window's year-month components: every
/// calendar month from the start date's month through the end date's
/// month, inclusive, produces one record. Windows may span a year
/// boundary.
///
/// # Examples
///
/// ```
/// use rentroll_schedule::ReportingWindow;
/// use rentroll_core::types::Date;
///
/// let window = ReportingWindow::new(
///     Date::from_ymd(2023, 11, 1).unwrap(),
///     Date::from_ymd(2024, 2, 29).unwrap(),
/// ).unwrap();
///
/// assert_eq!(window.month_span(), 4); // Nov, Dec, Jan, Feb
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingWindow {
    /// First date of the window.
    start: Date,
    /// Last date of the window.
    end: Date,
}

impl ReportingWindow {
    /// Creates a reporting window from start and end dates.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidWindow` if the end date precedes
    /// the start date. Equal dates are allowed and span one month.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_schedule::ReportingWindow;
    /// use rentroll_core::types::Date;
    ///
    /// let reversed = ReportingWindow::new(
    ///     Date::from_ymd(2023, 3, 1).unwrap(),
    ///     Date::from_ymd(2023, 1, 1).unwrap(),
    /// );
    /// assert!(reversed.is_err());
    /// ```
    pub fn new(start: Date, end: Date) -> Result<Self, ScheduleError> {
        if end < start {
            return Err(ScheduleError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first date of the window.
    #[inline]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the last date of the window.
    #[inline]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns the calendar month the window starts in.
    #[inline]
    pub fn start_month(&self) -> YearMonth {
        self.start.year_month()
    }

    /// Returns the calendar month the window ends in.
    #[inline]
    pub fn end_month(&self) -> YearMonth {
        self.end.year_month()
    }

    /// Iterates the window's months from start through end, inclusive.
    ///
    /// A validated window always yields at least one month.
    pub fn months(&self) -> impl Iterator<Item = YearMonth> {
        self.start_month().through(self.end_month())
    }

    /// Returns the number of months the window spans, inclusive.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_schedule::ReportingWindow;
    /// use rentroll_core::types::Date;
    ///
    /// let window = ReportingWindow::new(
    ///     Date::from_ymd(2023, 1, 1).unwrap(),
    ///     Date::from_ymd(2023, 3, 31).unwrap(),
    /// ).unwrap();
    ///
    /// assert_eq!(window.month_span(), 3);
    /// ```
    pub fn month_span(&self) -> usize {
        self.months().count()
    }
}
