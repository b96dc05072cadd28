//! Derived feature formulas
//!
//! Both engines route through [`FeatureSet::from_record`], so on-demand and
//! precomputed values for the same user are bit-for-bit identical. Divisions
//! by `purchase_count` floor the divisor at 1 so zero-purchase users stay
//! finite.

use serde::{Deserialize, Serialize};

use crate::data::UserRecord;

/// The five derived features for one user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Total spend divided by purchase count
    pub avg_purchase_value: f64,
    /// Purchases per month, assuming a 30-day month
    pub purchase_frequency: f64,
    /// Total spend scaled by age against a 50-year baseline
    pub user_lifetime_value: f64,
    /// Weighted blend of loyalty score (0.4) and purchase count (0.6)
    pub engagement_score: f64,
    /// Recency pressure per purchase, clamped to [0, 100]
    pub churn_risk: f64,
}

impl FeatureSet {
    /// Number of features carried per user
    pub const COUNT: usize = 5;

    /// Compute all five features from a raw record
    pub fn from_record(record: &UserRecord) -> Self {
        let purchases = f64::from(record.purchase_count.max(1));
        Self {
            avg_purchase_value: record.total_spend / purchases,
            purchase_frequency: f64::from(record.purchase_count) / 30.0,
            user_lifetime_value: record.total_spend * (f64::from(record.age) / 50.0),
            engagement_score: record.loyalty_score * 0.4
                + f64::from(record.purchase_count) * 0.6,
            churn_risk: (f64::from(record.days_since_last_purchase) / 30.0 * 100.0 / purchases)
                .clamp(0.0, 100.0),
        }
    }
}
