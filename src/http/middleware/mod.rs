//! HTTP middleware specific to this service.

pub mod metrics;

pub use metrics::track_metrics;
