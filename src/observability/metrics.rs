//! Metrics collection and exposition.
//!
//! # Metrics
//! - `sum_service_requests_total` (counter): requests by method, path, status
//! - `sum_service_request_duration_seconds` (histogram): latency by method, path
//! - `sum_service_rejected_bodies_total` (counter): decode failures by reason
//! - `sum_service_sequence_length` (histogram): elements per accepted body
//!
//! Recording is a no-op until [`init_metrics`] installs the Prometheus recorder.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

/// Record one completed request.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_owned()),
        ("path", path.to_owned()),
        ("status", status.to_string()),
    ];
    ::metrics::counter!("sum_service_requests_total", &labels).increment(1);

    let labels = [("method", method.to_owned()), ("path", path.to_owned())];
    ::metrics::histogram!("sum_service_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

/// Record a body that failed to decode.
pub fn record_rejected_body(reason: &'static str) {
    ::metrics::counter!("sum_service_rejected_bodies_total", "reason" => reason).increment(1);
}

/// Record the size of an accepted sequence.
pub fn record_sequence_length(len: usize) {
    ::metrics::histogram!("sum_service_sequence_length").record(len as f64);
}
