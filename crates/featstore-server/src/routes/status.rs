//! Health, version, and statistics endpoints

use std::sync::Arc;

use axum::{extract::State, Json};
use featstore::FeatureEngine;

use crate::routes::types::{
    EngineStatsResponse, HealthResponse, OptimizedStatsResponse, StatsResponse, VersionResponse,
};
use crate::routes::AppState;

/// Handle GET /health - liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handle GET /version - report server name and version
pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse::current())
}

/// Handle GET /stats - totals for both engines since startup
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let snapshot = state.metrics.snapshot().await;

    let basic = snapshot
        .get(state.basic.name())
        .copied()
        .unwrap_or_default();
    let optimized = snapshot
        .get(state.optimized.name())
        .copied()
        .unwrap_or_default();

    Json(StatsResponse {
        basic: EngineStatsResponse::from_totals(&basic),
        optimized: OptimizedStatsResponse {
            total_requests: optimized.request_count,
            avg_computation_time: optimized.average_ms(),
            total_computation_time: optimized.total_time_ms,
            cache_size: state.optimized.cache_size().await,
        },
        memory_usage_mb: state.memory.resident_mb().await,
    })
}
