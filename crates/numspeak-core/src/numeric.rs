//! Numeric values submitted to the arithmetic service.

use std::iter::{Product, Sum};
use std::ops::{Add, Mul};

use serde::Serialize;

/// A JSON number, kept as an integer for as long as the arithmetic allows.
///
/// Integer operands combine with checked arithmetic; on overflow, or as soon
/// as a float takes part, the result widens to `Float`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Numeric {
    /// A whole number that fits in `i64`.
    Int(i64),
    /// Any other JSON number.
    Float(f64),
}

impl Numeric {
    /// Reads a `Numeric` out of a JSON value. Returns `None` for anything
    /// other than a JSON number.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let serde_json::Value::Number(number) = value else {
            return None;
        };
        match number.as_i64() {
            Some(int) => Some(Self::Int(int)),
            None => number.as_f64().map(Self::Float),
        }
    }

    /// Returns the value as an `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(int) => int as f64,
            Self::Float(float) => float,
        }
    }
}

impl Add for Numeric {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_add(b)
                .map_or_else(|| Self::Float(self.as_f64() + rhs.as_f64()), Self::Int),
            _ => Self::Float(self.as_f64() + rhs.as_f64()),
        }
    }
}

impl Mul for Numeric {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_mul(b)
                .map_or_else(|| Self::Float(self.as_f64() * rhs.as_f64()), Self::Int),
            _ => Self::Float(self.as_f64() * rhs.as_f64()),
        }
    }
}

impl Sum for Numeric {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::Int(0), Add::add)
    }
}

impl Product for Numeric {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::Int(1), Mul::mul)
    }
}
