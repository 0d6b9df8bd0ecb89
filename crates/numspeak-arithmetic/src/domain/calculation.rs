//! Calculations over a list of submitted numbers.

use numspeak_core::error::DomainError;
use numspeak_core::numeric::Numeric;
use serde::Serialize;
use serde_json::Value;

/// A validated, non-empty list of numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    values: Vec<Numeric>,
}

/// The computed outcome of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    /// Sum of the values.
    pub sum: Numeric,
    /// Product of the values.
    pub product: Numeric,
}

impl Calculation {
    /// Parses the raw `values` parameter.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `raw` is not JSON, is not a list,
    /// contains anything other than numbers, or is empty.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let parsed: Value = serde_json::from_str(raw)
            .map_err(|e| DomainError::Validation(format!("values is not valid JSON: {e}")))?;

        let Value::Array(items) = parsed else {
            return Err(DomainError::Validation("values must be a list".to_owned()));
        };

        let values = items
            .iter()
            .map(Numeric::from_json)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| DomainError::Validation("values must all be numbers".to_owned()))?;

        if values.is_empty() {
            return Err(DomainError::Validation("values must not be empty".to_owned()));
        }

        Ok(Self { values })
    }

    /// Returns the values in submission order.
    #[must_use]
    pub fn values(&self) -> &[Numeric] {
        &self.values
    }

    /// Sum of the values, starting from integer zero.
    #[must_use]
    pub fn sum(&self) -> Numeric {
        self.values.iter().copied().sum()
    }

    /// Product of the values, starting from integer one.
    #[must_use]
    pub fn product(&self) -> Numeric {
        self.values.iter().copied().product()
    }

    /// Computes both results.
    #[must_use]
    pub fn result(&self) -> CalculationResult {
        CalculationResult {
            sum: self.sum(),
            product: self.product(),
        }
    }

    /// Consumes the calculation, returning its values.
    #[must_use]
    pub fn into_values(self) -> Vec<Numeric> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_validation(raw: &str) {
        let result = Calculation::parse(raw);
        assert!(
            matches!(result, Err(DomainError::Validation(_))),
            "expected validation error for {raw:?}, got {result:?}"
        );
    }

    #[test]
    fn test_parse_integer_list() {
        let calculation = Calculation::parse("[1, 2, 3, 4]").unwrap();

        assert_eq!(
            calculation.values(),
            &[
                Numeric::Int(1),
                Numeric::Int(2),
                Numeric::Int(3),
                Numeric::Int(4)
            ]
        );
        assert_eq!(calculation.sum(), Numeric::Int(10));
        assert_eq!(calculation.product(), Numeric::Int(24));
    }

    #[test]
    fn test_mixed_list_produces_float_results() {
        let result = Calculation::parse("[2, 0.5, 3]").unwrap().result();

        assert_eq!(result.sum, Numeric::Float(5.5));
        assert_eq!(result.product, Numeric::Float(3.0));
    }

    #[test]
    fn test_single_value() {
        let result = Calculation::parse("[-7]").unwrap().result();

        assert_eq!(result.sum, Numeric::Int(-7));
        assert_eq!(result.product, Numeric::Int(-7));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert_validation("[1, 2");
        assert_validation("");
        assert_validation("one");
    }

    #[test]
    fn test_rejects_non_list() {
        assert_validation("5");
        assert_validation(r#"{"values": [1]}"#);
        assert_validation(r#""[1]""#);
    }

    #[test]
    fn test_rejects_non_numeric_elements() {
        assert_validation(r#"[1, "2"]"#);
        assert_validation("[1, null]");
        assert_validation("[true]");
        assert_validation("[[1]]");
    }

    #[test]
    fn test_rejects_empty_list() {
        assert_validation("[]");
    }

    #[test]
    fn test_result_serializes_sum_then_product() {
        let result = Calculation::parse("[1, 2]").unwrap().result();

        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"sum":3,"product":2}"#
        );
    }
}
