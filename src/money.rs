//! Fixed-point monetary type with 2 decimal places precision.
//!
//! Uses `rust_decimal` internally with scale enforcement to ensure
//! consistent monetary calculations without floating-point errors.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// A decimal type that maintains exactly 2 decimal places of precision.
///
/// This type wraps `rust_decimal::Decimal` and ensures consistent scale
/// for all arithmetic operations, suitable for monetary calculations.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use teller::Money;
///
/// let amount = Money::from_str("10.5").unwrap();
/// assert_eq!(amount.to_string(), "10.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Creates a new `Money` from a `Decimal`, normalizing to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        Money(normalized)
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if this value is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed)?;
        Ok(Money::new(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money::new(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.0.rescale(Self::SCALE);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Money::new(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
        self.0.rescale(Self::SCALE);
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:.2}", self.0))
    }
}

/// Accepts either a string (`"10.50"`) or a bare JSON number (`10.5`);
/// legacy accounts files stored balances as floats.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MoneyVisitor;

        impl de::Visitor<'_> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a monetary amount as a string or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Money, E> {
                Money::from_str(v).map_err(E::custom)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Money, E> {
                Decimal::from_f64(v)
                    .map(Money::new)
                    .ok_or_else(|| E::custom(format!("{} is not a valid amount", v)))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Money, E> {
                Ok(Money::new(Decimal::from(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Money, E> {
                Ok(Money::new(Decimal::from(v)))
            }
        }

        deserializer.deserialize_any(MoneyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_normalizes_scale() {
        let m = Money::from_str("1.0").unwrap();
        assert_eq!(m.to_string(), "1.00");

        let m = Money::from_str("1.5").unwrap();
        assert_eq!(m.to_string(), "1.50");

        let m = Money::from_str("1.12").unwrap();
        assert_eq!(m.to_string(), "1.12");

        let m = Money::from_str("  2.5  ").unwrap();
        assert_eq!(m.to_string(), "2.50");
    }

    #[test]
    fn test_arithmetic_preserves_scale() {
        let a = Money::from_str("1.5").unwrap();
        let b = Money::from_str("2.5").unwrap();

        assert_eq!((a + b).to_string(), "4.00");
        assert_eq!((b - a).to_string(), "1.00");
    }

    #[test]
    fn test_zero_constant() {
        assert!(Money::ZERO.is_zero());
        assert!(!Money::ZERO.is_negative());
    }

    #[test]
    fn test_negative_detection() {
        assert!(Money::from_str("-0.01").unwrap().is_negative());
        assert!(!Money::from_str("0.00").unwrap().is_negative());
        assert!(!Money::from_str("0.01").unwrap().is_negative());
    }

    #[test]
    fn test_serializes_as_string() {
        let m = Money::from_str("10.5").unwrap();
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"10.50\"");
    }

    #[test]
    fn test_deserializes_from_string_and_number() {
        let from_string: Money = serde_json::from_str("\"10.50\"").unwrap();
        let from_float: Money = serde_json::from_str("10.5").unwrap();
        let from_int: Money = serde_json::from_str("10").unwrap();

        assert_eq!(from_string.to_string(), "10.50");
        assert_eq!(from_float.to_string(), "10.50");
        assert_eq!(from_int.to_string(), "10.00");
    }
}
