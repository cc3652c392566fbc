use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request logging middleware.
///
/// Tags every request with a fresh id, runs the handler inside a span
/// carrying it, logs one `api_request` event with method, path, status
/// and latency, and echoes the id back in `x-request-id`.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let uri = req.uri().path().to_string();
    let started = std::time::Instant::now();

    let span = tracing::info_span!("request", request_id = %request_id);
    let mut response = next.run(req).instrument(span.clone()).await;

    let status = response.status().as_u16();
    span.in_scope(|| {
        tracing::info!(
            method = %method,
            path = %uri,
            status = status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "api_request"
        );
    });

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
