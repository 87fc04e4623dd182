//! Money rounding and checked arithmetic.
//!
//! Every monetary value leaves the engine rounded to the configured number of
//! fractional digits, at the point it is computed. Sums and products over
//! caller-supplied hours and amounts go through [`checked`], so an oversized
//! value fails the job instead of panicking.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Rounds a money value half away from zero and fixes its scale.
///
/// The result always carries exactly `precision` fractional digits, so it
/// serializes as e.g. `"19.50"` rather than `"19.5"`.
///
/// # Examples
///
/// ```
/// use job_split_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("19.5").unwrap(), 2).to_string(), "19.50");
/// assert_eq!(round_money(Decimal::from_str("2.345").unwrap(), 2).to_string(), "2.35");
/// assert_eq!(round_money(Decimal::from_str("7.5").unwrap(), 0).to_string(), "8");
/// ```
pub fn round_money(value: Decimal, precision: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(precision);
    rounded
}

/// A zero with `precision` fractional digits.
pub fn zero_money(precision: u32) -> Decimal {
    round_money(Decimal::ZERO, precision)
}

/// Turns the result of a `checked_*` operation into an [`EngineResult`].
///
/// # Examples
///
/// ```
/// use job_split_engine::calculation::checked;
/// use rust_decimal::Decimal;
///
/// assert_eq!(checked(Decimal::ONE.checked_add(Decimal::ONE), "sum"), Ok(Decimal::new(2, 0)));
/// assert!(checked(Decimal::MAX.checked_add(Decimal::ONE), "sum").is_err());
/// ```
pub fn checked(value: Option<Decimal>, operation: &str) -> EngineResult<Decimal> {
    value.ok_or_else(|| EngineError::AmountOverflow {
        operation: operation.to_string(),
    })
}

/// Sums `values`, failing on overflow.
pub fn checked_sum(
    values: impl IntoIterator<Item = Decimal>,
    operation: &str,
) -> EngineResult<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |sum, value| checked(sum.checked_add(value), operation))
}
