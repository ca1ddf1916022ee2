//! Error types for the state layer's HTTP boundary
//!
//! The cache and limiter are failure-free at their own boundary: misses and
//! rejections are definite results, not errors. The only error this crate
//! produces is the middleware's translation of a rate-limit rejection into
//! an HTTP response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == State Error Enum ==
/// Errors surfaced where the state layer meets HTTP.
#[derive(Error, Debug)]
pub enum StateError {
    /// Client exceeded its per-window request ceiling
    #[error("Too many requests. Please try again later.")]
    RateLimited,
}

// == IntoResponse Implementation ==
impl IntoResponse for StateError {
    fn into_response(self) -> Response {
        let status = match &self {
            StateError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
