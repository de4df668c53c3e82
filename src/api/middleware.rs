//! Cross-cutting middleware: request timing and CORS.

use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Response header carrying the handler's elapsed time in decimal seconds.
pub const PROCESS_TIME_HEADER: &str = "x-process-time";

/// Record wall-clock processing time for a single request.
///
/// The start instant lives on this request's future, so concurrent
/// requests never see each other's timers. The inner handler's await
/// points are bracketed, not altered, and its response passes through
/// otherwise unchanged.
pub async fn record_process_time(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let mut response = next.run(request).await;

    let elapsed = start.elapsed().as_secs_f64();
    if let Ok(value) = HeaderValue::from_str(&format!("{elapsed:.6}")) {
        response.headers_mut().insert(PROCESS_TIME_HEADER, value);
    }

    response
}

/// Fully permissive CORS: all origins, methods, and headers, with
/// credentials allowed.
///
/// Credentialed responses may not use the `*` wildcard, so the allowed
/// origin/methods/headers mirror whatever the request sent.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
