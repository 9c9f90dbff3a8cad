//! List summation entry points.
//!
//! `sum_list` and `sum_list_test` share one contract. They are written
//! independently so that one can check the other.
//!
//! Integers are summed exactly in `i128` until the first float, so an
//! all-integer result does not depend on element order. A slice cannot hold
//! enough elements to overflow `i128` with `i64` inputs.

use crate::summation::Number;

/// Signature shared by both summation entry points.
pub type SumFn = fn(&[Number]) -> Number;

/// Running total that stays exact while every input is an integer.
#[derive(Debug, Clone, Copy)]
enum Accumulator {
    Exact(i128),
    Widened(f64),
}

/// Narrow an exact total to `Int`, or widen it when it does not fit `i64`.
fn narrow(total: i128) -> Number {
    match i64::try_from(total) {
        Ok(i) => Number::Int(i),
        Err(_) => Number::Float(total as f64),
    }
}

/// Sum a sequence of numbers.
///
/// Returns `Int(0)` for an empty slice. The result is an integer when every
/// element is an integer and the total fits in `i64`; otherwise it is a float.
pub fn sum_list(values: &[Number]) -> Number {
    let mut acc = Accumulator::Exact(0);
    for value in values {
        acc = match (acc, *value) {
            (Accumulator::Exact(total), Number::Int(i)) => Accumulator::Exact(total + i128::from(i)),
            (Accumulator::Exact(total), Number::Float(f)) => Accumulator::Widened(total as f64 + f),
            (Accumulator::Widened(total), v) => Accumulator::Widened(total + v.as_f64()),
        };
    }

    match acc {
        Accumulator::Exact(total) => narrow(total),
        Accumulator::Widened(total) => Number::Float(total),
    }
}

/// Reference summation: exact sum of the leading integers, then a float fold
/// over everything from the first float on.
pub fn sum_list_test(values: &[Number]) -> Number {
    let first_float = values
        .iter()
        .position(|v| v.is_float())
        .unwrap_or(values.len());
    let (ints, rest) = values.split_at(first_float);

    let exact: i128 = ints
        .iter()
        .filter_map(|v| match v {
            Number::Int(i) => Some(i128::from(*i)),
            Number::Float(_) => None,
        })
        .sum();
    if rest.is_empty() {
        return narrow(exact);
    }

    let total = rest.iter().fold(exact as f64, |acc, v| acc + v.as_f64());
    Number::Float(total)
}
