//! Endpoint handlers.

use axum::{body::Bytes, http::HeaderMap};

use crate::http::request::RequestIdExt;
use crate::http::response::{sum_body, ApiError};
use crate::observability::metrics;
use crate::summation::{self, NumericSequence, SumFn};

/// Fixed health-check body.
pub const GREETING: &str = "Hello, World!\n";

/// `GET /`
pub async fn home() -> &'static str {
    GREETING
}

/// `POST /sum_list`
pub async fn sum_list(headers: HeaderMap, body: Bytes) -> Result<String, ApiError> {
    handle_sum("sum_list", summation::sum_list, &headers, &body)
}

/// `POST /sum_list_test`
pub async fn sum_list_test(headers: HeaderMap, body: Bytes) -> Result<String, ApiError> {
    handle_sum("sum_list_test", summation::sum_list_test, &headers, &body)
}

/// Decode the body, sum it with `sum`, and format the result.
fn handle_sum(
    endpoint: &'static str,
    sum: SumFn,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<String, ApiError> {
    let request_id = headers.request_id();

    let sequence = NumericSequence::from_slice(body).map_err(|e| {
        tracing::warn!(
            request_id = %request_id,
            endpoint,
            body_len = body.len(),
            error = %e,
            "Rejected request body"
        );
        metrics::record_rejected_body(e.reason());
        e
    })?;

    metrics::record_sequence_length(sequence.len());
    let total = sum(sequence.as_slice());

    tracing::debug!(
        request_id = %request_id,
        endpoint,
        elements = sequence.len(),
        sum = %total,
        "Computed sum"
    );

    Ok(sum_body(total))
}
