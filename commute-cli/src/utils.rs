use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a command-line amount cannot be used.
#[derive(Debug, Error)]
pub enum ParseDecimalError {
    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount '{input}' must not be negative")]
    Negative { input: String },
}

/// Trims whitespace and removes thousands separators, so both `1,200,000`
/// and `12,00,000` are accepted.
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })
}

/// [`parse_decimal`] that also rejects negative values. Used as a clap
/// value parser for money and distance flags.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseDecimalError> {
    let value = parse_decimal(s)?;
    if value < Decimal::ZERO {
        return Err(ParseDecimalError::Negative {
            input: s.to_string(),
        });
    }
    Ok(value)
}

/// Formats an optional value for display, using "n/a" when `None`.
pub fn opt_display<T>(
    value: Option<T>,
    format: impl FnOnce(T) -> String,
) -> String {
    value.map(format).unwrap_or_else(|| "n/a".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_decimal("1,200,000").unwrap(), dec!(1200000));
    }

    #[test]
    fn parse_decimal_accepts_indian_grouping() {
        assert_eq!(parse_decimal("12,00,000").unwrap(), dec!(1200000));
    }

    #[test]
    fn parse_decimal_trim_whitespace() {
        assert_eq!(parse_decimal("  35000  ").unwrap(), dec!(35000));
    }

    #[test]
    fn parse_decimal_empty_treated_as_zero() {
        assert_eq!(parse_decimal("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_invalid_returns_error() {
        assert!(matches!(
            parse_decimal("12 lakh"),
            Err(ParseDecimalError::Invalid { .. })
        ));
    }

    #[test]
    fn parse_amount_rejects_negative() {
        assert!(matches!(
            parse_amount("-5,000"),
            Err(ParseDecimalError::Negative { .. })
        ));
        assert_eq!(parse_amount("0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn opt_display_uses_placeholder_for_none() {
        assert_eq!(opt_display(Some(2), |v| format!("{v} days")), "2 days");
        assert_eq!(opt_display(None::<i32>, |v| v.to_string()), "n/a");
    }
}
