// Crate-level lint configuration for pedantic clippy
#![allow(clippy::uninlined_format_args)] // Named args are clearer
#![allow(clippy::cast_possible_truncation)] // Elapsed millis fit in u64

//! Feature Store REST API Server
//!
//! Serves derived user features over two endpoints with identical
//! response shapes:
//!
//! - GET /basic/{user_id} computes features on demand, paying a
//!   simulated data-store latency on every request
//! - GET /optimized/{user_id} serves features precomputed at startup
//!   through a lazy per-user cache
//!
//! GET /stats reports per-engine totals so the two paths can be
//! compared side by side.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{routing::get, Router};
use clap::Parser;
use featstore::Dataset;
use featstore_server::routes::{self, AppState};
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Feature Store REST API Server
#[derive(Parser, Debug)]
#[command(name = "featstore-server")]
#[command(about = "Feature store demo REST API server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8000", env = "FEATSTORE_PORT")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0", env = "FEATSTORE_HOST")]
    host: String,

    /// Number of synthetic users to generate at startup
    #[arg(long, default_value = "1000", env = "FEATSTORE_USERS")]
    users: usize,

    /// Seed for the synthetic dataset generator
    #[arg(long, default_value = "42", env = "FEATSTORE_SEED")]
    seed: u64,

    /// Simulated data-store latency for the basic path, in milliseconds
    #[arg(long, default_value = "100", env = "FEATSTORE_LATENCY_MS")]
    latency_ms: u64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let dataset = Dataset::generate(args.users, args.seed);
    info!(users = dataset.len(), seed = args.seed, "Dataset generated");

    let precompute_start = Instant::now();
    let state = Arc::new(AppState::with_latency(
        dataset,
        Duration::from_millis(args.latency_ms),
    ));
    info!(
        precompute_ms = precompute_start.elapsed().as_millis() as u64,
        "Features precomputed for optimized path"
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health))
        .route("/version", get(routes::version))
        .route("/basic/{user_id}", get(routes::get_basic_features))
        .route("/optimized/{user_id}", get(routes::get_optimized_features))
        .route("/stats", get(routes::stats))
        .with_state(state)
        .layer(cors);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Feature store server listening on http://{}", addr);

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

/// Signal handler for graceful shutdown (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        () = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}
