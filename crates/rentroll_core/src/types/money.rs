//! Monetary rounding for currency amounts.
//!
//! Rent amounts are exact decimals (`rust_decimal::Decimal`), so the only
//! monetary concern at this layer is the two-decimal currency rounding
//! applied after each rent escalation step.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a currency amount to two decimal places, half away from zero.
///
/// Applied exactly once immediately after an escalated rent amount is
/// computed; the rounded value becomes the baseline for subsequent months.
///
/// # Examples
///
/// ```
/// use rentroll_core::types::money::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("110.005").unwrap();
/// assert_eq!(round_to_cents(amount), Decimal::from_str("110.01").unwrap());
///
/// let negative = Decimal::from_str("-110.005").unwrap();
/// assert_eq!(round_to_cents(negative), Decimal::from_str("-110.01").unwrap());
/// ```
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
