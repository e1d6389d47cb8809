//! Prometheus metrics for the dealer service.
//!
//! Metrics are exposed in Prometheus text format on a separate listener when
//! `METRICS_BIND` is configured. Without an installed recorder every call
//! below is a no-op.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use dealer_server::metrics;
//! use std::net::SocketAddr;
//!
//! let addr: SocketAddr = "127.0.0.1:9090".parse().unwrap();
//! metrics::init_metrics(addr).unwrap();
//!
//! metrics::deals_total(4);
//! metrics::http_requests_total("POST", "/api/v1/cards/distribute", 200);
//! ```

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// Metrics will be available at `http://<addr>/metrics`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record HTTP request.
pub fn http_requests_total(method: &str, path: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record HTTP request duration in milliseconds.
pub fn http_request_duration_ms(method: &str, path: &str, duration_ms: f64) {
    metrics::histogram!("http_request_duration_ms",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(duration_ms);
}

// ============================================================================
// Dealer Metrics
// ============================================================================

/// Count a successful deal and record its player count.
pub fn deals_total(players: usize) {
    metrics::counter!("deals_total").increment(1);
    metrics::histogram!("deal_players").record(players as f64);
}

/// Count a rejected or aborted deal by error kind.
pub fn deal_failures_total(kind: &'static str) {
    metrics::counter!("deal_failures_total", "kind" => kind).increment(1);
}
