//! Strict decoding of request bodies into numeric sequences.
//!
//! # Responsibilities
//! - Accept only a JSON array whose elements are all JSON numbers
//! - Report malformed bodies and non-numeric elements as distinct errors
//! - Never coerce (`true`, `"1"` and `null` are rejections, not numbers)

use serde_json::Value;
use thiserror::Error;

use crate::summation::Number;

/// Why a request body could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Body is not a well-formed JSON array.
    #[error("malformed body: {0}")]
    Malformed(String),

    /// Array element is not a number.
    #[error("element {index} is not a number (found {found})")]
    NonNumeric { index: usize, found: &'static str },
}

impl DecodeError {
    /// Short label used for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            DecodeError::Malformed(_) => "malformed",
            DecodeError::NonNumeric { .. } => "non_numeric",
        }
    }
}

/// An ordered list of numbers supplied in one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericSequence(Vec<Number>);

impl NumericSequence {
    pub fn new(values: Vec<Number>) -> Self {
        Self(values)
    }

    /// Decode a raw body such as `[1, 2.5, -3]`.
    ///
    /// Surrounding whitespace is allowed; anything else outside the array is not.
    pub fn from_slice(body: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| DecodeError::Malformed(e.to_string()))?;

        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(DecodeError::Malformed(format!(
                    "expected a JSON array of numbers, found {}",
                    kind(&other)
                )))
            }
        };

        items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Number(n) => Number::from_json(n).ok_or(DecodeError::NonNumeric {
                    index,
                    found: "unrepresentable number",
                }),
                other => Err(DecodeError::NonNumeric {
                    index,
                    found: kind(other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn as_slice(&self) -> &[Number] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Number>> for NumericSequence {
    fn from(values: Vec<Number>) -> Self {
        Self(values)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
