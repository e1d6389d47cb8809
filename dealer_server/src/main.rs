//! Card dealer HTTP server.

use std::sync::Arc;

use anyhow::{Context, Error};
use card_dealer::Dealer;
use dealer_server::{
    api,
    config::{ConfigOverrides, ServerConfig},
    logging, metrics,
};
use pico_args::Arguments;
use tracing::info;

const HELP: &str = "\
Run the card dealer server

USAGE:
  dealer_server [OPTIONS]

OPTIONS:
  --bind          IP:PORT  Server socket bind address   [default: env SERVER_BIND or 127.0.0.1:8000]
  --max-players   N        Largest accepted player count [default: env DEALER_MAX_PLAYERS or 10000]
  --seed          N        Fixed shuffle seed            [default: env DEALER_SEED or OS entropy]
  --metrics-bind  IP:PORT  Prometheus exporter address   [default: env METRICS_BIND or disabled]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  RUST_LOG                 Log filter (e.g., info,card_dealer=debug)
  (A .env file in the working directory is loaded if present)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = ConfigOverrides {
        bind: pargs.opt_value_from_str("--bind")?,
        max_players: pargs.opt_value_from_str("--max-players")?,
        seed: pargs.opt_value_from_str("--seed")?,
        metrics_bind: pargs.opt_value_from_str("--metrics-bind")?,
    };

    let config = ServerConfig::from_env(overrides)?;
    config.validate()?;

    logging::init();
    info!(
        bind = %config.bind,
        max_players = config.dealer.max_players,
        shuffle = %config.dealer.shuffle_source(),
        "Starting card dealer server"
    );

    if let Some(addr) = config.metrics_bind {
        metrics::init_metrics(addr)
            .with_context(|| format!("Failed to install Prometheus exporter on {addr}"))?;
        info!("Metrics exported at http://{addr}/metrics");
    }

    let state = api::AppState {
        dealer: Arc::new(Dealer::new(config.dealer.clone())),
    };
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Keep serving; the process can still be killed externally
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
