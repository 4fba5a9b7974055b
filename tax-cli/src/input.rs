use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when command-line text cannot be parsed as an amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a dollar amount into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Empty or whitespace-only input is treated as 0. Negative amounts are
/// returned as-is; the engine decides what to do with them.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid amount: {}", e);
        ParseAmountError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Jurisdiction codes are matched exactly by the engine, so user input is
/// trimmed and upper-cased first.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_amount("400,000").unwrap(), dec!(400000));
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  75000  ").unwrap(), dec!(75000));
    }

    #[test]
    fn parse_amount_empty_treated_as_zero() {
        assert_eq!(parse_amount("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_keeps_negative_sign() {
        assert_eq!(parse_amount("-1,000").unwrap(), dec!(-1000));
    }

    #[test]
    fn parse_amount_invalid_returns_error() {
        let err = parse_amount("12k").unwrap_err();
        assert!(err.to_string().starts_with("invalid amount '12k'"));
    }

    #[test]
    fn normalize_code_upper_cases_and_trims() {
        assert_eq!(normalize_code(" ny "), "NY");
        assert_eq!(normalize_code("Dc"), "DC");
    }
}
