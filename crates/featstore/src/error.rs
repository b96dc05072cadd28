//! Error types for feature lookups

use thiserror::Error;

/// Errors that can occur during feature retrieval
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeatureStoreError {
    /// No record exists for the requested user id
    #[error("user {0} not found")]
    UserNotFound(u64),
}

impl FeatureStoreError {
    /// Create a not-found error for the given user id
    pub fn user_not_found(user_id: u64) -> Self {
        Self::UserNotFound(user_id)
    }
}

/// Result type for feature store operations
pub type FeatureResult<T> = Result<T, FeatureStoreError>;
