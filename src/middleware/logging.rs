//! Request logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{debug, info, warn};

/// Log one line per request with method, path, status and latency.
///
/// Upstream failures and server errors log at `warn`; 404s for uncached
/// problems or missing notes are routine and stay at `info`.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let has_query = request.uri().query().is_some();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    match status {
        StatusCode::BAD_GATEWAY => warn!(
            %method,
            %path,
            status = status.as_u16(),
            %duration_ms,
            "Codeforces request failed"
        ),
        s if s.is_server_error() => warn!(
            %method,
            %path,
            status = s.as_u16(),
            %duration_ms,
            "Request completed with server error"
        ),
        s if s.is_client_error() && s != StatusCode::NOT_FOUND => warn!(
            %method,
            %path,
            status = s.as_u16(),
            %duration_ms,
            "Request rejected"
        ),
        s if path.ends_with("/health") => debug!(
            %method,
            %path,
            status = s.as_u16(),
            %duration_ms,
            "Health check"
        ),
        s => info!(
            %method,
            %path,
            has_query,
            status = s.as_u16(),
            %duration_ms,
            "Request completed"
        ),
    }

    response
}
