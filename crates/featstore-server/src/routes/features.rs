//! Feature retrieval endpoints
//!
//! Both endpoints return the same response shape, so callers can compare
//! the on-demand and precomputed paths request by request. Lookup timing
//! is folded into the shared metrics aggregator and the updated totals
//! are reported back in the same response.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use featstore::{FeatureEngine, FeatureSet, FeatureStoreError};

use crate::metrics::EngineTotals;
use crate::routes::types::{ErrorResponse, FeatureResponse, RequestMetrics};
use crate::routes::AppState;

/// Handle GET /basic/{user_id} - compute features on demand
pub async fn get_basic_features(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<u64>,
) -> Result<Json<FeatureResponse>, (StatusCode, Json<ErrorResponse>)> {
    let (features, computation_time, totals) = timed_lookup(&state.basic, &state, user_id).await?;

    Ok(Json(FeatureResponse {
        features,
        computation_time,
        metrics: RequestMetrics {
            cache_hit: false,
            memory_usage_mb: state.memory.resident_mb().await,
            avg_computation_time: totals.average_ms(),
            total_requests: totals.request_count,
            feature_count: FeatureSet::COUNT,
            precomputed: None,
        },
    }))
}

/// Handle GET /optimized/{user_id} - serve precomputed features
///
/// `cache_hit` reports whether the user was already in the lazy cache
/// before this call, so the first request for a user is a miss even
/// though its features were derived at startup.
pub async fn get_optimized_features(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<u64>,
) -> Result<Json<FeatureResponse>, (StatusCode, Json<ErrorResponse>)> {
    let was_cached = state.optimized.is_cached(user_id).await;

    let (features, computation_time, totals) =
        timed_lookup(&state.optimized, &state, user_id).await?;

    Ok(Json(FeatureResponse {
        features,
        computation_time,
        metrics: RequestMetrics {
            cache_hit: was_cached,
            memory_usage_mb: state.memory.resident_mb().await,
            avg_computation_time: totals.average_ms(),
            total_requests: totals.request_count,
            feature_count: FeatureSet::COUNT,
            precomputed: Some(true),
        },
    }))
}

/// Run one engine lookup, time it, and record the sample
///
/// Failed lookups record no sample, so /stats only aggregates requests
/// that produced features.
async fn timed_lookup(
    engine: &dyn FeatureEngine,
    state: &AppState,
    user_id: u64,
) -> Result<(FeatureSet, f64, EngineTotals), (StatusCode, Json<ErrorResponse>)> {
    let start = Instant::now();
    let features = engine.get_features(user_id).await.map_err(user_not_found)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let totals = state.metrics.record(engine.name(), elapsed_ms).await;

    Ok((features, elapsed_ms, totals))
}

fn user_not_found(e: FeatureStoreError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "User not found".to_string(),
            details: Some(e.to_string()),
        }),
    )
}
