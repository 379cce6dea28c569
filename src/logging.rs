//! Tracing subscriber initialization for embedders.
//!
//! The library itself only emits `tracing` events; whoever hosts it decides
//! how (and whether) they are collected. Call one of these once at startup,
//! or install your own subscriber.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with sensible defaults.
///
/// The log level is controlled by the `RUST_LOG` environment variable and
/// defaults to `info`.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize JSON-formatted logging (recommended for production).
///
/// Outputs logs in JSON format for log aggregation systems.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging_json() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .init();
}
