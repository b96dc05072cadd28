//! Synthetic user dataset
//!
//! The dataset is generated once at startup from a fixed seed and never
//! mutated afterwards. Both feature engines borrow it read-only; the
//! precomputing engine keeps its derived values in its own table.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use rand::prelude::*;

/// One row of the user table
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    /// Unique, stable user identity
    pub user_id: u64,
    /// Age in years, 18-79
    pub age: u32,
    /// Lifetime number of purchases
    pub purchase_count: u32,
    /// Lifetime spend
    pub total_spend: f64,
    /// Timestamp of the most recent purchase
    pub last_purchase_date: DateTime<Utc>,
    /// Loyalty program score, 0-100
    pub loyalty_score: f64,
    /// Mean order value; informational only, no feature formula reads it
    pub average_order_value: f64,
    /// Days elapsed since the last purchase
    pub days_since_last_purchase: u32,
}

/// Immutable in-memory table of user records with id lookup
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<UserRecord>,
    by_id: HashMap<u64, usize>,
}

impl Dataset {
    /// Build a dataset from existing records
    pub fn from_records(records: Vec<UserRecord>) -> Self {
        let by_id = records
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.user_id, idx))
            .collect();
        Self { records, by_id }
    }

    /// Generate `n_users` synthetic records from a fixed seed
    ///
    /// User ids are assigned densely as `0..n_users`. The same
    /// `(n_users, seed)` pair always draws identical field values;
    /// `last_purchase_date` is anchored to the generation instant, with
    /// record `i` dated `n_users - 1 - i` days ago.
    pub fn generate(n_users: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let now = Utc::now();

        let records = (0..n_users)
            .map(|i| UserRecord {
                user_id: i as u64,
                age: rng.gen_range(18..80),
                purchase_count: rng.gen_range(0..100),
                total_spend: rng.gen_range(0.0..1000.0),
                last_purchase_date: now - Duration::days((n_users - 1 - i) as i64),
                loyalty_score: rng.gen_range(0.0..100.0),
                average_order_value: rng.gen_range(10.0..200.0),
                days_since_last_purchase: rng.gen_range(0..365),
            })
            .collect();

        Self::from_records(records)
    }

    /// Look up a record by user id
    pub fn get(&self, user_id: u64) -> Option<&UserRecord> {
        self.by_id.get(&user_id).map(|&idx| &self.records[idx])
    }

    /// All records, in insertion order
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
