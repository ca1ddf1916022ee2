//! Rate-Limit Middleware
//!
//! Axum adapter between the rate limiter and the HTTP layer: derives the
//! client identity from the connection address and rejects with 429 once the
//! identity exceeds its window ceiling. The limiter itself knows nothing
//! about HTTP.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::error::StateError;
use crate::limiter::RateLimiter;

/// Rejects or forwards a request based on the client's window counter.
///
/// Install with `axum::middleware::from_fn_with_state(limiter, rate_limit)`
/// ahead of authentication, and serve the router with
/// `into_make_service_with_connect_info::<SocketAddr>()` (or insert a
/// `ConnectInfo` extension) so the client address is available.
pub async fn rate_limit(
    State(limiter): State<RateLimiter>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Result<Response, StateError> {
    let identity = addr.ip().to_string();

    if !limiter.allow(&identity).await {
        debug!(client = %identity, limit = limiter.limit(), "rate limit exceeded");
        return Err(StateError::RateLimited);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    fn test_router(limiter: RateLimiter) -> Router {
        Router::new()
            .route("/workout-sections", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn_with_state(limiter, rate_limit))
    }

    fn request_from(addr: &str) -> HttpRequest<Body> {
        let mut request = HttpRequest::builder()
            .uri("/workout-sections")
            .body(Body::empty())
            .unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(addr.parse::<SocketAddr>().unwrap()));
        request
    }

    #[tokio::test]
    async fn test_requests_under_limit_pass() {
        let app = test_router(RateLimiter::new(3, Duration::from_secs(60)));

        for _ in 0..3 {
            let response = app
                .clone()
                .oneshot(request_from("192.168.1.5:40000"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_request_over_limit_gets_429() {
        let app = test_router(RateLimiter::new(2, Duration::from_secs(60)));

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(request_from("192.168.1.5:40000"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .oneshot(request_from("192.168.1.5:40000"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn test_identity_is_per_ip_not_per_port() {
        let app = test_router(RateLimiter::new(1, Duration::from_secs(60)));

        let response = app
            .clone()
            .oneshot(request_from("192.168.1.5:40000"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Same host, different ephemeral port: same identity
        let response = app
            .clone()
            .oneshot(request_from("192.168.1.5:40001"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        // Different host is unaffected
        let response = app
            .oneshot(request_from("192.168.1.6:40000"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
