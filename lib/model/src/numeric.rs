use crate::{Decimal, Double, EvalResult, Float, Integer, TypeError};
use std::cmp::Ordering;

/// A value of one of the four primitive numeric XSD types.
#[derive(Copy, Clone, Debug)]
pub enum Numeric {
    Integer(Integer),
    Decimal(Decimal),
    Float(Float),
    Double(Double),
}

impl Numeric {
    pub fn format_value(&self) -> String {
        match self {
            Numeric::Integer(value) => value.to_string(),
            Numeric::Decimal(value) => value.to_string(),
            Numeric::Float(value) => value.to_string(),
            Numeric::Double(value) => value.to_string(),
        }
    }

    /// Returns whether the value is zero or NaN.
    pub fn is_zero_or_nan(&self) -> bool {
        match self {
            Numeric::Integer(value) => i64::from(*value) == 0,
            Numeric::Decimal(value) => *value == Decimal::from(0),
            Numeric::Float(value) => {
                let value = f32::from(*value);
                value == 0.0 || value.is_nan()
            }
            Numeric::Double(value) => {
                let value = f64::from(*value);
                value == 0.0 || value.is_nan()
            }
        }
    }

    /// Lossy conversion into a double-precision value.
    pub fn to_double(self) -> Double {
        match self {
            Numeric::Integer(value) => value.into(),
            Numeric::Decimal(value) => value.into(),
            Numeric::Float(value) => value.into(),
            Numeric::Double(value) => value,
        }
    }

    /// Exact conversion into a decimal, failing for non-finite or too large floating values.
    pub fn to_decimal(self) -> EvalResult<Decimal> {
        Ok(match self {
            Numeric::Integer(value) => value.into(),
            Numeric::Decimal(value) => value,
            Numeric::Float(value) => Decimal::try_from(value)?,
            Numeric::Double(value) => Decimal::try_from(value)?,
        })
    }

    /// Truncating conversion into an integer.
    pub fn to_integer(self) -> EvalResult<Integer> {
        Ok(match self {
            Numeric::Integer(value) => value,
            Numeric::Decimal(value) => Integer::try_from(value)?,
            Numeric::Float(value) => Integer::try_from(value)?,
            Numeric::Double(value) => Integer::try_from(value)?,
        })
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match NumericPair::with_casts_from(*self, *other) {
            NumericPair::Integer(lhs, rhs) => Some(lhs.cmp(&rhs)),
            NumericPair::Decimal(lhs, rhs) => Some(lhs.cmp(&rhs)),
            NumericPair::Float(lhs, rhs) => lhs.partial_cmp(&rhs),
            NumericPair::Double(lhs, rhs) => lhs.partial_cmp(&rhs),
        }
    }
}

/// Two numeric values promoted to their common type.
///
/// Relevant Resources:
/// - [XPath - Numeric Type Promotion](https://www.w3.org/TR/xpath20/#promotion)
pub enum NumericPair {
    Integer(Integer, Integer),
    Decimal(Decimal, Decimal),
    Float(Float, Float),
    Double(Double, Double),
}

impl NumericPair {
    pub fn with_casts_from(lhs: Numeric, rhs: Numeric) -> NumericPair {
        match (lhs, rhs) {
            (Numeric::Integer(lhs), Numeric::Integer(rhs)) => NumericPair::Integer(lhs, rhs),
            (Numeric::Integer(lhs), Numeric::Decimal(rhs)) => {
                NumericPair::Decimal(Decimal::from(lhs), rhs)
            }
            (Numeric::Integer(lhs), Numeric::Float(rhs)) => NumericPair::Float(lhs.into(), rhs),
            (Numeric::Integer(lhs), Numeric::Double(rhs)) => NumericPair::Double(lhs.into(), rhs),

            (Numeric::Decimal(lhs), Numeric::Integer(rhs)) => {
                NumericPair::Decimal(lhs, Decimal::from(rhs))
            }
            (Numeric::Decimal(lhs), Numeric::Decimal(rhs)) => NumericPair::Decimal(lhs, rhs),
            (Numeric::Decimal(lhs), Numeric::Float(rhs)) => NumericPair::Float(lhs.into(), rhs),
            (Numeric::Decimal(lhs), Numeric::Double(rhs)) => NumericPair::Double(lhs.into(), rhs),

            (Numeric::Float(lhs), Numeric::Integer(rhs)) => NumericPair::Float(lhs, rhs.into()),
            (Numeric::Float(lhs), Numeric::Decimal(rhs)) => NumericPair::Float(lhs, rhs.into()),
            (Numeric::Float(lhs), Numeric::Float(rhs)) => NumericPair::Float(lhs, rhs),
            (Numeric::Float(lhs), Numeric::Double(rhs)) => NumericPair::Double(lhs.into(), rhs),

            (Numeric::Double(lhs), Numeric::Integer(rhs)) => NumericPair::Double(lhs, rhs.into()),
            (Numeric::Double(lhs), Numeric::Decimal(rhs)) => NumericPair::Double(lhs, rhs.into()),
            (Numeric::Double(lhs), Numeric::Float(rhs)) => NumericPair::Double(lhs, rhs.into()),
            (Numeric::Double(lhs), Numeric::Double(rhs)) => NumericPair::Double(lhs, rhs),
        }
    }
}

/// Maps the `None` of a checked arithmetic operation to a [TypeError].
pub fn checked<T>(value: Option<T>, operation: &str) -> EvalResult<T> {
    value.ok_or_else(|| TypeError::new(format!("Arithmetic overflow in {operation}")))
}
