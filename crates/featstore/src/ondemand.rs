//! On-demand feature engine
//!
//! Recomputes every feature from the raw record on each call, after a
//! simulated data-store round trip. The delay is a cooperative suspension:
//! concurrent requests overlap rather than queue behind each other.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::data::Dataset;
use crate::engine::FeatureEngine;
use crate::error::{FeatureResult, FeatureStoreError};
use crate::features::FeatureSet;

/// Computes features from scratch on every lookup
pub struct OnDemandEngine {
    dataset: Arc<Dataset>,
    latency: Duration,
}

impl OnDemandEngine {
    /// Simulated remote-store round trip injected before each computation
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(100);

    /// Create an engine with the default simulated latency
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_latency(dataset, Self::DEFAULT_LATENCY)
    }

    /// Create an engine with a custom simulated latency
    pub fn with_latency(dataset: Arc<Dataset>, latency: Duration) -> Self {
        Self { dataset, latency }
    }
}

#[async_trait]
impl FeatureEngine for OnDemandEngine {
    fn name(&self) -> &'static str {
        "basic"
    }

    async fn get_features(&self, user_id: u64) -> FeatureResult<FeatureSet> {
        // Emulate the remote feature store; must not block the runtime
        tokio::time::sleep(self.latency).await;

        let record = self
            .dataset
            .get(user_id)
            .ok_or(FeatureStoreError::UserNotFound(user_id))?;

        Ok(FeatureSet::from_record(record))
    }
}
