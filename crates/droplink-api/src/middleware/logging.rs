//! Per-request access log line.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

/// Emits one line per completed request. Server-side failures are logged at
/// `warn` so they stand out without raising the default filter.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        warn!(status = status.as_u16(), elapsed_ms, "{method} {path}");
    } else {
        info!(status = status.as_u16(), elapsed_ms, "{method} {path}");
    }

    response
}
