//! Request-side numeric coercion for monetary and tax fields.
//!
//! Clients send amounts either as JSON numbers or as numeric strings. Tax
//! values must be numeric; amounts are lenient and collapse anything that is
//! not a number to zero. `null` is treated the same as an absent field.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value;

/// Parse a decimal from its textual form, accepting scientific notation
fn parse_str(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Interpret a JSON value as a decimal, if it is numeric
pub fn parse_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_str(&n.to_string()),
        Value::String(s) => parse_str(s.trim()),
        _ => None,
    }
}

/// Coerce a JSON value to a decimal, treating non-numeric input as zero
pub fn coerce_decimal(value: &Value) -> Decimal {
    match value {
        Value::String(s) if s.trim().is_empty() => Decimal::ZERO,
        other => parse_decimal(other).unwrap_or(Decimal::ZERO),
    }
}

/// Deserialize an optional amount, coercing non-numeric values to zero
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(v) => Some(coerce_decimal(&v)),
    })
}

/// Deserialize an optional decimal, rejecting non-numeric values
pub fn strict_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => parse_decimal(&v)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("expected a numeric value, got {}", v))),
    }
}
