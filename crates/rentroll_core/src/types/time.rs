//! Calendar types for rent schedule calculations.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `YearMonth`: An absolute calendar month, the unit of schedule iteration
//! - Gregorian calendar helpers: `is_leap_year`, `days_in_month`
//!
//! # Examples
//!
//! ```
//! use rentroll_core::types::time::{Date, YearMonth};
//!
//! let start = Date::from_ymd(2023, 11, 15).unwrap();
//! let end = Date::from_ymd(2024, 2, 15).unwrap();
//!
//! // Iterate the inclusive month span, across the year boundary
//! let months: Vec<YearMonth> = start.year_month().through(end.year_month()).collect();
//! assert_eq!(months.len(), 4);
//! assert_eq!(months[3], YearMonth::new(2024, 2).unwrap());
//! ```

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation and standard date arithmetic.
/// This wrapper ensures type safety and provides a consistent API
/// for date operations in rent calculations.
///
/// # Examples
///
/// ```
/// use rentroll_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2023, 6, 15).unwrap();
/// assert_eq!(date.year(), 2023);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2023-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calculate days between dates
/// let start = Date::from_ymd(2023, 1, 1).unwrap();
/// let end = Date::from_ymd(2023, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2023)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_core::types::time::Date;
    ///
    /// // Valid date
    /// let date = Date::from_ymd(2023, 6, 15).unwrap();
    ///
    /// // Leap year February 29th
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    ///
    /// // Invalid date returns error
    /// let invalid = Date::from_ymd(2023, 2, 30);
    /// assert!(invalid.is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Arguments
    /// * `s` - Date string in ISO 8601 format
    ///
    /// # Returns
    /// `Ok(Date)` if parsing succeeds, `Err(DateError::ParseError)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_core::types::time::Date;
    ///
    /// let date = Date::parse("2023-06-15").unwrap();
    /// assert_eq!(date.year(), 2023);
    ///
    /// let invalid = Date::parse("not-a-date");
    /// assert!(invalid.is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_core::types::time::Date;
    /// use chrono::Datelike;
    ///
    /// let date = Date::from_ymd(2023, 6, 15).unwrap();
    /// let naive = date.into_inner();
    /// assert_eq!(naive.weekday(), chrono::Weekday::Thu);
    /// ```
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2023, 6, 15).unwrap();
    /// assert_eq!(date.year(), 2023);
    /// ```
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2023, 6, 15).unwrap();
    /// assert_eq!(date.month(), 6);
    /// ```
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2023, 6, 15).unwrap();
    /// assert_eq!(date.day(), 15);
    /// ```
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Projects the date onto its calendar month.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_core::types::time::{Date, YearMonth};
    ///
    /// let date = Date::from_ymd(2023, 6, 15).unwrap();
    /// assert_eq!(date.year_month(), YearMonth::new(2023, 6).unwrap());
    /// ```
    pub fn year_month(&self) -> YearMonth {
        YearMonth {
            year: self.year(),
            month: self.month(),
        }
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_core::types::time::Date;
    ///
    /// let start = Date::from_ymd(2023, 1, 1).unwrap();
    /// let end = Date::from_ymd(2023, 1, 11).unwrap();
    ///
    /// assert_eq!(end - start, 10);
    /// assert_eq!(start - end, -10);
    /// ```
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// An absolute calendar month: a `(year, month)` pair.
///
/// The schedule generator iterates months as `YearMonth` values, so
/// reporting windows that span a year boundary iterate correctly and
/// every due date carries its own month's year.
///
/// Ordering is chronological: first by year, then by month.
///
/// # Examples
///
/// ```
/// use rentroll_core::types::time::YearMonth;
///
/// let nov = YearMonth::new(2023, 11).unwrap();
/// let feb = YearMonth::new(2024, 2).unwrap();
///
/// assert!(nov < feb);
/// assert_eq!(nov.next(), YearMonth::new(2023, 12).unwrap());
/// assert_eq!(nov.through(feb).count(), 4);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearMonth {
    /// Year component.
    year: i32,
    /// Month component (1-12).
    month: u32,
}

impl YearMonth {
    /// Creates a YearMonth from year and month components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2023)
    /// * `month` - Month (1-12)
    ///
    /// # Returns
    /// `Ok(YearMonth)` if the month is in 1-12, `Err(DateError::InvalidMonth)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_core::types::time::YearMonth;
    ///
    /// let ym = YearMonth::new(2023, 6).unwrap();
    /// assert_eq!(ym.year(), 2023);
    /// assert_eq!(ym.month(), 6);
    ///
    /// assert!(YearMonth::new(2023, 13).is_err());
    /// assert!(YearMonth::new(2023, 0).is_err());
    /// ```
    pub fn new(year: i32, month: u32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// Returns the year component.
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month component (1-12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Linear month index used for month arithmetic and iteration.
    fn index(self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    fn from_index(index: i64) -> Self {
        Self {
            year: index.div_euclid(12) as i32,
            month: (index.rem_euclid(12) + 1) as u32,
        }
    }

    /// Returns the following calendar month, rolling the year over after December.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_core::types::time::YearMonth;
    ///
    /// let dec = YearMonth::new(2023, 12).unwrap();
    /// assert_eq!(dec.next(), YearMonth::new(2024, 1).unwrap());
    /// ```
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Iterates the months from `self` through `end`, inclusive.
    ///
    /// The iterator is empty when `end` precedes `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_core::types::time::YearMonth;
    ///
    /// let start = YearMonth::new(2023, 11).unwrap();
    /// let end = YearMonth::new(2024, 2).unwrap();
    ///
    /// let months: Vec<YearMonth> = start.through(end).collect();
    /// assert_eq!(months.len(), 4);
    /// assert_eq!(months[0], start);
    /// assert_eq!(months[3], end);
    /// ```
    pub fn through(self, end: YearMonth) -> impl Iterator<Item = YearMonth> {
        (self.index()..=end.index()).map(YearMonth::from_index)
    }

    /// Returns the number of days in this calendar month.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_core::types::time::YearMonth;
    ///
    /// assert_eq!(YearMonth::new(2023, 2).unwrap().days_in_month(), 28);
    /// assert_eq!(YearMonth::new(2024, 2).unwrap().days_in_month(), 29);
    /// assert_eq!(YearMonth::new(2024, 4).unwrap().days_in_month(), 30);
    /// ```
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Clamps a day-of-month to the last valid day of this month.
    ///
    /// Days that exceed the month length are normalised to the final
    /// day instead of overflowing into the next month.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_core::types::time::YearMonth;
    ///
    /// let feb = YearMonth::new(2023, 2).unwrap();
    /// assert_eq!(feb.day_clamped(31), 28);
    /// assert_eq!(feb.day_clamped(15), 15);
    ///
    /// let leap_feb = YearMonth::new(2024, 2).unwrap();
    /// assert_eq!(leap_feb.day_clamped(31), 29);
    /// ```
    pub fn day_clamped(&self, day: u32) -> u32 {
        day.min(self.days_in_month())
    }

    /// Returns the first day of this month as a `Date`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_core::types::time::{Date, YearMonth};
    ///
    /// let ym = YearMonth::new(2024, 2).unwrap();
    /// assert_eq!(ym.first_day(), Date::from_ymd(2024, 2, 1).unwrap());
    /// ```
    pub fn first_day(&self) -> Date {
        // Month is validated at construction; day 1 exists in every month.
        Date::from_ymd(self.year, self.month, 1).expect("month validated at construction")
    }
}

impl fmt::Display for YearMonth {
    /// Formats the month as YYYY-MM.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Determines whether a year is a Gregorian leap year.
///
/// A year is a leap year if it is divisible by 4 and either not
/// divisible by 100 or divisible by 400.
///
/// # Examples
///
/// ```
/// use rentroll_core::types::time::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000)); // Centennial leap year
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2100));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given calendar month.
///
/// # Arguments
/// * `year` - Year (used for February's leap day)
/// * `month` - Month (1-12)
///
/// # Panics
/// Panics if `month` is outside 1-12.
///
/// # Examples
///
/// ```
/// use rentroll_core::types::time::days_in_month;
///
/// assert_eq!(days_in_month(2023, 1), 31);
/// assert_eq!(days_in_month(2023, 2), 28);
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2023, 4), 30);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => panic!("month must be in 1-12, got {}", month),
    }
}
