use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;

/// Logs every HTTP request: duration, response size, status, method and path
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // The body has to be buffered to learn its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                status = parts.status.as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "{} {} | failed to read response body: {}",
                method,
                uri.path(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let elapsed_ms = start.elapsed().as_millis() as u64;
    let status = parts.status.as_u16();
    if parts.status.is_server_error() {
        tracing::error!(status, elapsed_ms, "{} {} | {}", method, uri.path(), format_size(bytes.len()));
    } else if parts.status.is_client_error() {
        tracing::warn!(status, elapsed_ms, "{} {} | {}", method, uri.path(), format_size(bytes.len()));
    } else {
        tracing::info!(status, elapsed_ms, "{} {} | {}", method, uri.path(), format_size(bytes.len()));
    }

    Response::from_parts(parts, Body::from(bytes))
}
