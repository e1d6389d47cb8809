//! HTTP API for the dealer service.
//!
//! # Modules
//!
//! - [`cards`]: JSON distribution endpoint
//! - [`page`]: Server-rendered HTML form and results
//! - [`middleware`]: Request metrics
//! - [`request_id`]: `x-request-id` correlation
//!
//! # Endpoints Overview
//!
//! ```text
//! GET  /health                      - Health check
//! POST /api/v1/cards/distribute     - Deal cards (JSON)
//! GET  /                            - HTML form
//! POST /distribute                  - Deal cards (HTML form post)
//! ```
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use card_dealer::Dealer;
//! use dealer_server::api::{AppState, create_router};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState {
//!     dealer: Arc::new(Dealer::default()),
//! };
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # CORS
//!
//! CORS is configured permissively; the service holds no credentials.

pub mod cards;
pub mod middleware;
pub mod page;
pub mod request_id;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use card_dealer::{Dealer, ShuffleSource};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Application state shared across all HTTP handlers.
///
/// The dealer holds only immutable configuration, so requests never contend.
#[derive(Clone)]
pub struct AppState {
    pub dealer: Arc<Dealer>,
}

/// Create the complete API router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    let v1_routes = Router::new().route("/cards/distribute", post(cards::distribute));

    Router::new()
        .route("/", get(page::index))
        .route("/distribute", post(page::distribute_form))
        .route("/health", get(health_check))
        .nest("/api/v1", v1_routes)
        .route_layer(axum::middleware::from_fn(middleware::metrics_middleware))
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint for monitoring and load balancers.
///
/// Deals once to a single player with the configured shuffle source, which
/// exercises the entropy source. Returns `200 OK` when that succeeds and
/// `503 Service Unavailable` otherwise.
///
/// ```bash
/// curl http://localhost:8000/health
/// # {"status":"healthy","version":"1.0.0","shuffle":"entropy","max_players":10000,"timestamp":"..."}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let healthy = state
        .dealer
        .distribute_raw("1")
        .inspect_err(|e| tracing::error!("Health check deal failed: {e}"))
        .is_ok();

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let shuffle = match state.dealer.shuffle_source() {
        ShuffleSource::Entropy => "entropy",
        ShuffleSource::Seeded(_) => "seeded",
    };

    let response = json!({
        "status": if healthy { "healthy" } else { "unhealthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "shuffle": shuffle,
        "max_players": state.dealer.config().max_players,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status_code, Json(response))
}
