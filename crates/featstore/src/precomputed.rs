//! Precomputing feature engine
//!
//! Pays the full feature-derivation cost once at construction: a single
//! pass over the dataset fills a derived-features table keyed by user id.
//! Lookups then go through an exact-match result cache that is populated
//! lazily, one entry per user on first access, and never evicted.
//!
//! The dataset itself is never written to; derived values live in the
//! engine's own table.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::data::Dataset;
use crate::engine::FeatureEngine;
use crate::error::{FeatureResult, FeatureStoreError};
use crate::features::FeatureSet;

/// Serves lookups from precomputed features behind a lazy result cache
pub struct PrecomputedEngine {
    /// Features derived for every record at construction; read-only afterwards
    derived: HashMap<u64, FeatureSet>,
    /// Lazily filled per-id memo of served results
    cache: RwLock<HashMap<u64, FeatureSet>>,
}

impl PrecomputedEngine {
    /// Derive features for the whole dataset in one pass
    pub fn new(dataset: &Dataset) -> Self {
        let derived = dataset
            .records()
            .iter()
            .map(|record| (record.user_id, FeatureSet::from_record(record)))
            .collect();

        Self {
            derived,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Whether `user_id` already has a cache entry
    ///
    /// Request handlers call this before `get_features` to report the
    /// cache-hit flag for the call about to be made.
    pub async fn is_cached(&self, user_id: u64) -> bool {
        let cache = self.cache.read().await;
        cache.contains_key(&user_id)
    }

    /// Number of cache entries, equal to the distinct ids served so far
    pub async fn cache_size(&self) -> usize {
        let cache = self.cache.read().await;
        cache.len()
    }
}

#[async_trait]
impl FeatureEngine for PrecomputedEngine {
    fn name(&self) -> &'static str {
        "optimized"
    }

    async fn get_features(&self, user_id: u64) -> FeatureResult<FeatureSet> {
        {
            let cache = self.cache.read().await;
            if let Some(features) = cache.get(&user_id) {
                return Ok(*features);
            }
        }

        let features = *self
            .derived
            .get(&user_id)
            .ok_or(FeatureStoreError::UserNotFound(user_id))?;

        let mut cache = self.cache.write().await;
        cache.insert(user_id, features);
        Ok(features)
    }
}
