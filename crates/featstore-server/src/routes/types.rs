//! Response types for the feature store API

use featstore::FeatureSet;
use serde::{Deserialize, Serialize};

use crate::metrics::EngineTotals;

// ============ Meta Types ============

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests
    pub status: String,
}

impl HealthResponse {
    /// The response served by GET /health
    pub fn healthy() -> Self {
        HealthResponse {
            status: "healthy".to_string(),
        }
    }
}

/// API version and metadata response
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResponse {
    /// Package name
    pub name: String,
    /// Package version
    pub version: String,
}

impl VersionResponse {
    /// Create version response with current build info
    pub fn current() -> Self {
        VersionResponse {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// ============ Feature Retrieval Types ============

/// Response body for GET /basic/{user_id} and GET /optimized/{user_id}
#[derive(Debug, Serialize, Deserialize)]
pub struct FeatureResponse {
    /// The five derived features for the requested user
    pub features: FeatureSet,
    /// Wall-clock duration of this engine call in milliseconds
    pub computation_time: f64,
    /// Request-level metrics, reflecting totals after this request
    pub metrics: RequestMetrics,
}

/// Per-request metrics block embedded in feature responses
#[derive(Debug, Serialize, Deserialize)]
pub struct RequestMetrics {
    /// Whether the result was cached before this call; always false on
    /// the basic path
    pub cache_hit: bool,
    /// Resident memory of the process in megabytes
    pub memory_usage_mb: f64,
    /// Mean computation time for this engine, including this request
    pub avg_computation_time: f64,
    /// Requests served by this engine, including this one
    pub total_requests: u64,
    /// Number of features in `features`
    pub feature_count: usize,
    /// Present and true on the optimized path only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precomputed: Option<bool>,
}

/// Error body for failed lookups
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error summary
    pub error: String,
    /// Optional details
    pub details: Option<String>,
}

// ============ Stats Types ============

/// Response body for GET /stats
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Totals for the on-demand path
    pub basic: EngineStatsResponse,
    /// Totals for the precomputed path
    pub optimized: OptimizedStatsResponse,
    /// Resident memory of the process in megabytes
    pub memory_usage_mb: f64,
}

/// Per-engine totals since startup
#[derive(Debug, Serialize, Deserialize)]
pub struct EngineStatsResponse {
    /// Requests served by this engine
    pub total_requests: u64,
    /// Mean computation time in milliseconds; 0 before any requests
    pub avg_computation_time: f64,
    /// Cumulative computation time in milliseconds
    pub total_computation_time: f64,
}

impl EngineStatsResponse {
    /// Build the response block from recorded totals
    pub fn from_totals(totals: &EngineTotals) -> Self {
        EngineStatsResponse {
            total_requests: totals.request_count,
            avg_computation_time: totals.average_ms(),
            total_computation_time: totals.total_time_ms,
        }
    }
}

/// Totals for the precomputed path, including its cache occupancy
#[derive(Debug, Serialize, Deserialize)]
pub struct OptimizedStatsResponse {
    /// Requests served by this engine
    pub total_requests: u64,
    /// Mean computation time in milliseconds; 0 before any requests
    pub avg_computation_time: f64,
    /// Cumulative computation time in milliseconds
    pub total_computation_time: f64,
    /// Distinct user ids served since startup
    pub cache_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_status() {
        let response = HealthResponse::healthy();
        assert_eq!(response.status, "healthy");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"status": "healthy"}));
    }

    #[test]
    fn test_version_response_current() {
        let version = VersionResponse::current();
        assert_eq!(version.name, "featstore-server");
        assert!(!version.version.is_empty());
    }

    #[test]
    fn test_request_metrics_omits_precomputed_when_absent() {
        let metrics = RequestMetrics {
            cache_hit: false,
            memory_usage_mb: 12.5,
            avg_computation_time: 101.0,
            total_requests: 1,
            feature_count: 5,
            precomputed: None,
        };

        let json = serde_json::to_value(&metrics).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("precomputed"));
        assert_eq!(object["cache_hit"], false);
        assert_eq!(object["feature_count"], 5);
    }

    #[test]
    fn test_request_metrics_carries_precomputed_flag() {
        let metrics = RequestMetrics {
            cache_hit: true,
            memory_usage_mb: 12.5,
            avg_computation_time: 0.2,
            total_requests: 2,
            feature_count: 5,
            precomputed: Some(true),
        };

        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["precomputed"], true);
        assert_eq!(json["cache_hit"], true);
    }

    #[test]
    fn test_engine_stats_from_totals() {
        let totals = EngineTotals {
            request_count: 4,
            total_time_ms: 400.0,
        };

        let response = EngineStatsResponse::from_totals(&totals);
        assert_eq!(response.total_requests, 4);
        assert_eq!(response.avg_computation_time, 100.0);
        assert_eq!(response.total_computation_time, 400.0);
    }

    #[test]
    fn test_engine_stats_zeroed_before_traffic() {
        let response = EngineStatsResponse::from_totals(&EngineTotals::default());
        assert_eq!(response.total_requests, 0);
        assert_eq!(response.avg_computation_time, 0.0);
        assert_eq!(response.total_computation_time, 0.0);
    }

    #[test]
    fn test_stats_response_shape() {
        let stats = StatsResponse {
            basic: EngineStatsResponse {
                total_requests: 2,
                avg_computation_time: 100.5,
                total_computation_time: 201.0,
            },
            optimized: OptimizedStatsResponse {
                total_requests: 3,
                avg_computation_time: 0.4,
                total_computation_time: 1.2,
                cache_size: 2,
            },
            memory_usage_mb: 48.0,
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["basic"]["total_requests"], 2);
        assert_eq!(json["optimized"]["cache_size"], 2);
        assert!(json["basic"].get("cache_size").is_none());
        assert_eq!(json["memory_usage_mb"], 48.0);
    }
}
