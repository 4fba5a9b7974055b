//! Common utility functions for tax calculations.
//!
//! This module provides the rounding helpers shared by the calculators and
//! the display formatters.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Rounds a decimal value to a whole number, with midpoints rounded away
/// from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(11807.49)), dec!(11807));
/// assert_eq!(round_whole(dec!(11807.50)), dec!(11808));
/// assert_eq!(round_whole(dec!(-2.5)), dec!(-3));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a ratio in `[0, 1]` to a whole percentage.
///
/// Ratios outside that range are not produced by validated inputs; a
/// negative ratio maps to 0.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::whole_percent;
///
/// assert_eq!(whole_percent(dec!(0.13)), 13);
/// assert_eq!(whole_percent(dec!(0.565)), 57);
/// ```
pub fn whole_percent(ratio: Decimal) -> u32 {
    round_whole(ratio * dec!(100)).to_u32().unwrap_or_default()
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}
