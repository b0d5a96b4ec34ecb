/// Request logging middleware
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

/// Request logging middleware
///
/// Logs all incoming requests with:
/// - Request ID (generated)
/// - HTTP method and path
/// - Response status code
/// - Request duration
///
/// Events emitted while handling the request carry the request ID through
/// the enclosing span.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = info_span!("request", request_id = %request_id);

    async move {
        info!(method = %method, path = %path, "Incoming request");

        let response = next.run(request).await;

        let duration = start.elapsed();
        let status = response.status();

        if status.is_success() {
            info!(
                method = %method,
                path = %path,
                status = %status.as_u16(),
                duration_ms = %duration.as_millis(),
                "Request completed"
            );
        } else if status.is_client_error() || status.is_server_error() {
            warn!(
                method = %method,
                path = %path,
                status = %status.as_u16(),
                duration_ms = %duration.as_millis(),
                "Request failed"
            );
        }

        response
    }
    .instrument(span)
    .await
}
