//! HTTP service that shuffles a 52-card deck and deals it to N players.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
