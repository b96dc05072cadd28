//! REST API routes and shared application state
//!
//! Handlers and response types are re-exported here so callers can route
//! everything through `routes::`.

pub mod features;
pub mod status;
pub mod types;

pub use features::*;
pub use status::*;
pub use types::*;

use std::sync::Arc;
use std::time::Duration;

use featstore::{Dataset, OnDemandEngine, PrecomputedEngine};

use crate::memory::MemoryProbe;
use crate::metrics::Metrics;

/// Shared application state for all handlers
pub struct AppState {
    /// On-demand engine behind GET /basic/{user_id}
    pub basic: OnDemandEngine,
    /// Precomputed engine behind GET /optimized/{user_id}
    pub optimized: PrecomputedEngine,
    /// Per-engine request totals
    pub metrics: Metrics,
    /// Resident-memory probe for metrics blocks
    pub memory: MemoryProbe,
}

impl AppState {
    /// Create state over a dataset using the default simulated latency
    pub fn new(dataset: Dataset) -> Self {
        Self::with_latency(dataset, OnDemandEngine::DEFAULT_LATENCY)
    }

    /// Create state with a custom simulated latency for the basic path
    ///
    /// Precomputes features for every user in the dataset before serving.
    pub fn with_latency(dataset: Dataset, latency: Duration) -> Self {
        let dataset = Arc::new(dataset);
        AppState {
            basic: OnDemandEngine::with_latency(Arc::clone(&dataset), latency),
            optimized: PrecomputedEngine::new(&dataset),
            metrics: Metrics::new(),
            memory: MemoryProbe::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use featstore::FeatureEngine;

    #[tokio::test]
    async fn test_app_state_engines_share_dataset() {
        let state = AppState::with_latency(Dataset::generate(10, 42), Duration::ZERO);

        let basic = state.basic.get_features(3).await.unwrap();
        let optimized = state.optimized.get_features(3).await.unwrap();
        assert_eq!(basic, optimized);
    }

    #[tokio::test]
    async fn test_app_state_starts_with_empty_totals() {
        let state = AppState::new(Dataset::generate(5, 42));

        assert!(state.metrics.snapshot().await.is_empty());
        assert_eq!(state.optimized.cache_size().await, 0);
    }
}
