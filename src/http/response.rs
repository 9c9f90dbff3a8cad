//! Response formatting and error mapping.
//!
//! # Responsibilities
//! - Render sums as newline-terminated text
//! - Map endpoint errors to HTTP status codes
//!
//! # Design Decisions
//! - Error bodies are plain text, like success bodies
//! - Every client error is recoverable; the server keeps serving

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::summation::{DecodeError, Number};

/// Errors surfaced by the summation endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body was not a well-formed array of numbers.
    #[error(transparent)]
    InvalidBody(#[from] DecodeError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), format!("{self}\n")).into_response()
    }
}

/// Body text for a computed sum.
pub fn sum_body(total: Number) -> String {
    format!("{total}\n")
}
