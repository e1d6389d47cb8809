//! Metrics middleware recording request counts and latency.
//!
//! Paths are labelled with the matched route template so unknown URLs do not
//! create new label values. The middleware is attached with `route_layer`, so
//! it only sees requests that matched a route.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::{logging, metrics};

/// Record `http_requests_total` and `http_request_duration_ms` for every routed request.
pub async fn metrics_middleware(path: MatchedPath, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = path.as_str().to_string();

    let response = next.run(request).await;

    let elapsed = start.elapsed();
    let status = response.status().as_u16();
    metrics::http_requests_total(&method, &path, status);
    metrics::http_request_duration_ms(&method, &path, elapsed.as_secs_f64() * 1000.0);
    logging::log_api_request(&method, &path, status, elapsed.as_millis() as u64);

    response
}
