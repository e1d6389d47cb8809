//! Structured logging configuration.
//!
//! Log records from the `card_dealer` library (emitted through `log`) are
//! forwarded into the same subscriber.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging
///
/// Levels are configurable via the `RUST_LOG` env var.
///
/// # Example
///
/// ```no_run
/// use dealer_server::logging;
///
/// #[tokio::main]
/// async fn main() {
///     logging::init();
///     tracing::info!("Server starting");
/// }
/// ```
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,tower_http=warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Structured logging initialized");
}

/// Log the outcome of a distribution request
///
/// # Arguments
///
/// * `request_id` - Correlation id of the HTTP request
/// * `players` - Player count if it passed validation
/// * `error_kind` - Error label when the deal failed
pub fn log_deal(request_id: &str, players: Option<usize>, error_kind: Option<&str>) {
    match error_kind {
        None => tracing::info!(
            request_id = request_id,
            players = players,
            "Cards distributed"
        ),
        Some(kind @ ("entropy" | "irregularity")) => tracing::error!(
            request_id = request_id,
            players = players,
            error_kind = kind,
            "Distribution aborted"
        ),
        Some(kind) => tracing::info!(
            request_id = request_id,
            players = players,
            error_kind = kind,
            "Distribution rejected"
        ),
    }
}

/// Log API request/response
///
/// Requests slower than one second are logged at warn level.
pub fn log_api_request(method: &str, path: &str, status_code: u16, duration_ms: u64) {
    if duration_ms > 1000 {
        tracing::warn!(
            http_method = method,
            http_path = path,
            http_status = status_code,
            duration_ms = duration_ms,
            "Slow API request"
        );
    } else {
        tracing::debug!(
            http_method = method,
            http_path = path,
            http_status = status_code,
            duration_ms = duration_ms,
            "API request completed"
        );
    }
}
