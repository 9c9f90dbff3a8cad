//! List summation web service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌───────────────────────────────────────────────┐
//!     ──────────────────────┼─▶ http::server ──▶ http::handlers             │
//!                           │   (middleware)       │ decode body            │
//!                           │                      ▼                        │
//!                           │                 summation::sequence           │
//!                           │                      │ NumericSequence        │
//!                           │                      ▼                        │
//!     Client Response       │                 summation::sum                │
//!     ◀─────────────────────┼── http::response ◀───┘ Number                 │
//!                           │                                               │
//!                           │  config · observability · security · lifecycle│
//!                           └───────────────────────────────────────────────┘
//! ```

// Core
pub mod http;
pub mod summation;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use summation::{sum_list, sum_list_test, Number, NumericSequence};
