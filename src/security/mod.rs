//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → limits.rs (concurrency slot, body size)
//!     → handler
//!     → headers.rs (hardening headers on the response)
//! ```
//!
//! # Design Decisions
//! - Request bodies are decoded as data, never evaluated
//! - Fail closed: oversize or malformed input is rejected, not truncated

pub mod headers;
pub mod limits;
