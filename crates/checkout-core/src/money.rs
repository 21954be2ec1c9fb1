//! # Monetary Amounts
//!
//! Amount parsing and minor-unit conversion for the order broker.
//!
//! Clients send amounts in major currency units (e.g. rupees) as a JSON
//! number or numeric string; the gateway wants minor units (paise).
//! Conversion is `round(amount * 100)` with half-up rounding of the exact
//! decimal product, so `19.995` becomes `2000`, not `1999`.

use crate::error::{PaymentError, PaymentResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parse a client-supplied amount into an exact decimal.
///
/// Accepts JSON numbers and numeric strings (including scientific
/// notation). Anything else, or any value that is not strictly positive,
/// is an `InvalidAmount`.
pub fn parse_amount(raw: &serde_json::Value) -> PaymentResult<Decimal> {
    let amount = match raw {
        serde_json::Value::Number(n) => parse_decimal(&n.to_string())?,
        serde_json::Value::String(s) => parse_decimal(s.trim())?,
        _ => return Err(PaymentError::InvalidAmount),
    };

    if amount <= Decimal::ZERO {
        return Err(PaymentError::InvalidAmount);
    }

    Ok(amount)
}

/// Convert a major-unit amount to minor units (1 major = 100 minor).
///
/// Half-up rounding: midpoints round away from zero.
pub fn to_minor_units(amount: Decimal) -> PaymentResult<i64> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|subunits| subunits.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_i64())
        .ok_or(PaymentError::InvalidAmount)
}

fn parse_decimal(s: &str) -> PaymentResult<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| PaymentError::InvalidAmount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minor(raw: serde_json::Value) -> PaymentResult<i64> {
        to_minor_units(parse_amount(&raw)?)
    }

    #[test]
    fn test_whole_amount() {
        assert_eq!(minor(json!(499)).unwrap(), 49900);
        assert_eq!(minor(json!(1)).unwrap(), 100);
    }

    #[test]
    fn test_fractional_amount() {
        assert_eq!(minor(json!(10.50)).unwrap(), 1050);
        assert_eq!(minor(json!(0.01)).unwrap(), 1);
    }

    // Midpoint matrix: half-up on the exact decimal product.
    #[test]
    fn test_half_up_midpoints() {
        assert_eq!(minor(json!(19.995)).unwrap(), 2000);
        assert_eq!(minor(json!(10.005)).unwrap(), 1001);
        assert_eq!(minor(json!(10.004)).unwrap(), 1000);
        assert_eq!(minor(json!(0.005)).unwrap(), 1);
        assert_eq!(minor(json!(1.015)).unwrap(), 102);
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(minor(json!("250.50")).unwrap(), 25050);
        assert_eq!(minor(json!("  499 ")).unwrap(), 49900);
        assert_eq!(minor(json!("1e2")).unwrap(), 10000);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(matches!(
            parse_amount(&json!(0)),
            Err(PaymentError::InvalidAmount)
        ));
        assert!(matches!(
            parse_amount(&json!(-5)),
            Err(PaymentError::InvalidAmount)
        ));
        assert!(matches!(
            parse_amount(&json!("-0.01")),
            Err(PaymentError::InvalidAmount)
        ));
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(parse_amount(&json!("abc")).is_err());
        assert!(parse_amount(&json!("")).is_err());
        assert!(parse_amount(&json!(null)).is_err());
        assert!(parse_amount(&json!(true)).is_err());
        assert!(parse_amount(&json!({"amount": 1})).is_err());
        assert!(parse_amount(&json!([499])).is_err());
    }
}
