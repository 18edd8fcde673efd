//! Access log for the feed API.

use std::time::Instant;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

/// Emits one event per request with method, path, status and latency.
///
/// Rejected bearer tokens and ownership denials get their own message so
/// they can be filtered without parsing status codes.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let code = status.as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match status {
        s if s.is_server_error() => {
            warn!(%method, %path, status = code, elapsed_ms, "Feed request failed");
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            info!(%method, %path, status = code, elapsed_ms, "Feed request denied");
        }
        _ => {
            info!(%method, %path, status = code, elapsed_ms, "Feed request served");
        }
    }

    response
}
