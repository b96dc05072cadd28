//! Common interface over the two feature retrieval strategies

use async_trait::async_trait;

use crate::error::FeatureResult;
use crate::features::FeatureSet;

/// A feature retrieval strategy
///
/// Both engines answer the same question (the features for one user) with
/// different cost profiles. The request layer times and records calls
/// through this trait so the two paths share one code path for metrics.
#[async_trait]
pub trait FeatureEngine: Send + Sync {
    /// Short name used as the metrics key for this engine
    fn name(&self) -> &'static str;

    /// Retrieve the feature set for `user_id`
    ///
    /// Fails with [`FeatureStoreError::UserNotFound`] when no record
    /// matches.
    ///
    /// [`FeatureStoreError::UserNotFound`]: crate::error::FeatureStoreError::UserNotFound
    async fn get_features(&self, user_id: u64) -> FeatureResult<FeatureSet>;
}
