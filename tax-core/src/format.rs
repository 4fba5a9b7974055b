//! Display formatting for amounts, percentages and rates.
//!
//! Currency is rendered the way an `en-US` formatter renders US dollars with
//! zero fraction digits: `$` prefix, comma thousands separators, midpoints
//! rounded away from zero.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::round_whole;

/// Formats an amount as whole dollars. A missing amount renders as `$0`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::format::format_currency;
///
/// assert_eq!(format_currency(Some(dec!(31020.00))), "$31,020");
/// assert_eq!(format_currency(Some(dec!(2280.85))), "$2,281");
/// assert_eq!(format_currency(None), "$0");
/// ```
pub fn format_currency(amount: Option<Decimal>) -> String {
    let rounded = round_whole(amount.unwrap_or_default());
    let digits = group_thousands(&rounded.abs().trunc().to_string());

    if rounded < Decimal::ZERO {
        format!("-${digits}")
    } else {
        format!("${digits}")
    }
}

/// Formats a whole percentage, e.g. `57%`.
pub fn format_percent(percent: u32) -> String {
    format!("{percent}%")
}

/// Formats a rate in `[0, 1]` as a percentage with `decimals` fraction
/// digits.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::format::format_rate;
///
/// assert_eq!(format_rate(dec!(0.0075), 3), "0.750%");
/// assert_eq!(format_rate(dec!(0.0825), 2), "8.25%");
/// ```
pub fn format_rate(
    rate: Decimal,
    decimals: u32,
) -> String {
    let percent = (rate * dec!(100))
        .round_dp_with_strategy(decimals, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    format!("{percent:.prec$}%", prec = decimals as usize)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
