//! Request limits.
//!
//! # Responsibilities
//! - Enforce maximum request body size (413 Payload Too Large)
//! - Bound the number of requests processed at once
//!
//! # Design Decisions
//! - Body limit replaces axum's built-in default so config is the only source
//! - Concurrency limit waits for a slot instead of rejecting (backpressure)

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{DefaultBodyLimit, State},
    http::{Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tokio::sync::Semaphore;
use tower_http::limit::RequestBodyLimitLayer;

/// Reject bodies larger than `max_body_size` bytes.
pub fn apply_body_limit(router: Router, max_body_size: usize) -> Router {
    router
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_size))
}

/// Shared pool of request slots.
#[derive(Debug, Clone)]
pub struct ConcurrencyGate {
    slots: Arc<Semaphore>,
    max_concurrent: usize,
}

impl ConcurrencyGate {
    /// Values above `Semaphore::MAX_PERMITS` are clamped to it.
    pub fn new(max_concurrent: usize) -> Self {
        let max_concurrent = max_concurrent.min(Semaphore::MAX_PERMITS);
        Self {
            slots: Arc::new(Semaphore::new(max_concurrent)),
            max_concurrent,
        }
    }

    /// Slots not currently held by a request.
    pub fn available(&self) -> usize {
        self.slots.available_permits()
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }
}

/// Hold a slot for the duration of the request.
async fn concurrency_limit(
    State(gate): State<ConcurrencyGate>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Ok(_permit) = gate.slots.clone().acquire_owned().await else {
        // Only reachable if the semaphore were closed.
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    };

    tracing::trace!(available = gate.available(), "Request slot acquired");
    next.run(request).await
}

/// Wrap `router` so at most `gate.max_concurrent()` requests run at once.
pub fn apply_concurrency_limit(router: Router, gate: ConcurrencyGate) -> Router {
    router.layer(middleware::from_fn_with_state(gate, concurrency_limit))
}
