//! Numeric aggregation subsystem.
//!
//! # Data Flow
//! ```text
//! raw request body (bytes)
//!     → sequence.rs (strict JSON array-of-numbers decoding)
//!     → NumericSequence
//!     → sum.rs (sum_list / sum_list_test)
//!     → Number (formatted by number.rs)
//! ```
//!
//! # Design Decisions
//! - Bodies are decoded, never evaluated; anything that is not an array of
//!   JSON numbers is rejected before summation
//! - Integers are summed exactly until a float is seen; a total outside `i64`
//!   is returned as a float
//! - The empty sequence sums to integer `0`

pub mod number;
pub mod sequence;
pub mod sum;

pub use number::Number;
pub use sequence::{DecodeError, NumericSequence};
pub use sum::{sum_list, sum_list_test, SumFn};
