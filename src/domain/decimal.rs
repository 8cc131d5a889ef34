//! Decimal with exactly two fractional digits, backed by `rust_decimal`.
//!
//! `5`, `5.1` and `5.10` all normalize to scale 2 and render as `5.00` / `5.10`.

use super::errors::ValidationError;
use rust_decimal::{Decimal as RustDecimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits every value carries.
pub const SCALE: u32 = 2;

const EXPECTED: &str = "decimal number";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Decimal(RustDecimal);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Parses a base-10 literal (`5`, `-5.126`, `1e2`) and rounds it half away from zero
/// to two fractional digits.
impl FromStr for Decimal {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::new(s, EXPECTED);

        let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E');
        let mantissa = s.split(['e', 'E']).next().unwrap_or_default();
        if !s.chars().all(allowed) || !mantissa.chars().any(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let parsed = if s.contains(['e', 'E']) {
            RustDecimal::from_scientific(s)
        } else {
            RustDecimal::from_str_exact(s)
        }
        .map_err(|_| invalid())?;

        let mut value = parsed.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(SCALE);
        // rescale stops short when the mantissa would overflow
        if value.scale() != SCALE {
            return Err(invalid());
        }
        if value.is_zero() {
            value.set_sign_positive(true);
        }
        Ok(Self(value))
    }
}

impl TryFrom<String> for Decimal {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Decimal> for String {
    fn from(value: Decimal) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> String {
        s.parse::<Decimal>().unwrap().to_string()
    }

    #[test]
    fn test_always_two_fractional_digits() {
        assert_eq!(parse("5"), "5.00");
        assert_eq!(parse("5.1"), "5.10");
        assert_eq!(parse("10"), "10.00");
        assert_eq!(parse("0"), "0.00");
        assert_eq!(parse("007.50"), "7.50");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(parse("5.126"), "5.13");
        assert_eq!(parse("5.125"), "5.13");
        assert_eq!(parse("5.124"), "5.12");
        assert_eq!(parse("-5.125"), "-5.13");
        assert_eq!(parse("0.004"), "0.00");
        assert_eq!(parse("0.005"), "0.01");
        assert_eq!(parse("0.0001"), "0.00");
    }

    #[test]
    fn test_sign_and_shorthand_forms() {
        assert_eq!(parse("+3"), "3.00");
        assert_eq!(parse("-0.5"), "-0.50");
        assert_eq!(parse("1e2"), "100.00");
        assert_eq!(parse("2.5E-1"), "0.25");
        assert_eq!(parse("-0.004"), "0.00");
    }

    #[test]
    fn test_rejects_non_decimal_text() {
        for input in ["abc", "", ".", "-", "1.2.3", "1e", "e5", "1,5", "12abc", " 1", "0x10"] {
            let err = input.parse::<Decimal>().unwrap_err();
            assert_eq!(err.input, input);
            assert_eq!(err.to_string(), format!("{} is not a valid decimal number.", input));
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!("1e30".parse::<Decimal>().is_err());
        assert!("1e28".parse::<Decimal>().is_err());
        assert!("99999999999999999999999999999".parse::<Decimal>().is_err());
    }

    #[test]
    fn test_serde_uses_rendered_string() {
        let d: Decimal = "8".parse().unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"8.00\"");
        let back: Decimal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<Decimal>("\"nope\"").is_err());
    }
}
