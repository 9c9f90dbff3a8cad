//! Scalar numeric value with integer/float widening.

use std::fmt;
use std::ops::Add;

/// A single numeric value from a request body.
///
/// Integers are kept exact; any operation involving a float, or an integer
/// addition that overflows `i64`, produces a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Additive identity.
    pub const ZERO: Number = Number::Int(0);

    /// Value widened to `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Convert a decoded JSON number.
    ///
    /// Integers outside the `i64` range are widened to floats.
    pub fn from_json(n: &serde_json::Number) -> Option<Self> {
        if let Some(i) = n.as_i64() {
            return Some(Number::Int(i));
        }
        n.as_f64().map(Number::Float)
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match a.checked_add(b) {
                Some(total) => Number::Int(total),
                None => Number::Float(a as f64 + b as f64),
            },
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Int(i)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

impl fmt::Display for Number {
    /// Integers print in decimal. Floats always carry a fractional part or an
    /// exponent (`4.0`, `1e+16`, `1e-05`), so a float sum never reads as an
    /// integer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) => f.write_str(&format_float(*x)),
        }
    }
}

/// Shortest round-trip float text with a signed, two-digit exponent.
fn format_float(x: f64) -> String {
    // Debug output already switches to exponent form at the same magnitudes
    // and always keeps a ".0" on integral values.
    let text = format!("{x:?}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
