//! Per-engine request metrics
//!
//! Tracks, for each engine name, how many requests it served and the
//! cumulative computation time in milliseconds. Feature handlers record a
//! sample per request; the running averages derived here surface in
//! per-request responses and the /stats endpoint.

use std::collections::HashMap;

use tokio::sync::RwLock;

/// Running totals for one engine
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EngineTotals {
    /// Requests recorded for this engine
    pub request_count: u64,
    /// Sum of recorded computation times in milliseconds
    pub total_time_ms: f64,
}

impl EngineTotals {
    /// Fold one request's computation time into the totals
    fn apply(&mut self, elapsed_ms: f64) {
        self.request_count += 1;
        self.total_time_ms += elapsed_ms;
    }

    /// Mean computation time in milliseconds; 0 when nothing recorded
    pub fn average_ms(&self) -> f64 {
        self.total_time_ms / self.request_count.max(1) as f64
    }
}

/// Thread-safe per-engine request metrics
#[derive(Debug, Default)]
pub struct Metrics {
    engines: RwLock<HashMap<String, EngineTotals>>,
}

impl Metrics {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one request's computation time for `engine`
    ///
    /// The counter increment and the time accumulation happen in one
    /// critical section, so concurrent callers never tear or lose a
    /// sample. The returned totals include the sample just applied.
    pub async fn record(&self, engine: &str, elapsed_ms: f64) -> EngineTotals {
        let mut engines = self.engines.write().await;
        let totals = engines.entry(engine.to_string()).or_default();
        totals.apply(elapsed_ms);
        *totals
    }

    /// Running average for `engine` in milliseconds; 0 before any requests
    pub async fn average(&self, engine: &str) -> f64 {
        let engines = self.engines.read().await;
        engines
            .get(engine)
            .copied()
            .unwrap_or_default()
            .average_ms()
    }

    /// Consistent view of every engine's totals
    pub async fn snapshot(&self) -> HashMap<String, EngineTotals> {
        let engines = self.engines.read().await;
        engines.clone()
    }
}

/// Kani proofs for metrics invariants
#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify the average divisor never reaches zero
    #[kani::proof]
    fn verify_average_divisor_floors_at_one() {
        let totals = EngineTotals {
            request_count: kani::any(),
            total_time_ms: 0.0,
        };
        kani::assert(
            totals.request_count.max(1) >= 1,
            "Average divisor must floor at one",
        );
    }

    /// Verify apply advances the counter by exactly one per sample
    #[kani::proof]
    fn verify_apply_counts_each_sample_once() {
        let mut totals = EngineTotals::default();
        let samples = [kani::any::<f64>(), kani::any::<f64>()];

        for sample in samples {
            kani::assume(sample.is_finite());
            totals.apply(sample);
        }

        kani::assert(
            totals.request_count == samples.len() as u64,
            "Each sample must count exactly once",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_average_zero_before_any_requests() {
        let metrics = Metrics::new();
        assert_eq!(metrics.average("basic").await, 0.0);
        assert_eq!(metrics.average("optimized").await, 0.0);
    }

    #[tokio::test]
    async fn test_record_accumulates_totals() {
        let metrics = Metrics::new();

        metrics.record("basic", 100.0).await;
        metrics.record("basic", 50.0).await;

        let snapshot = metrics.snapshot().await;
        let basic = snapshot.get("basic").unwrap();
        assert_eq!(basic.request_count, 2);
        assert_eq!(basic.total_time_ms, 150.0);
        assert_eq!(metrics.average("basic").await, 75.0);
    }

    #[tokio::test]
    async fn test_record_returns_updated_totals() {
        let metrics = Metrics::new();

        let first = metrics.record("optimized", 10.0).await;
        assert_eq!(first.request_count, 1);
        assert_eq!(first.total_time_ms, 10.0);
        assert_eq!(first.average_ms(), 10.0);

        let second = metrics.record("optimized", 30.0).await;
        assert_eq!(second.request_count, 2);
        assert_eq!(second.average_ms(), 20.0);
    }

    #[tokio::test]
    async fn test_average_matches_cumulative_over_count() {
        let metrics = Metrics::new();
        let samples = [3.5, 120.0, 0.25, 41.0, 7.75];

        for sample in samples {
            metrics.record("basic", sample).await;
        }

        let snapshot = metrics.snapshot().await;
        let basic = snapshot.get("basic").unwrap();
        let expected = samples.iter().sum::<f64>() / samples.len() as f64;
        assert_eq!(basic.request_count as usize, samples.len());
        assert_eq!(metrics.average("basic").await, expected);
    }

    #[tokio::test]
    async fn test_concurrent_records_lose_nothing() {
        let metrics = Arc::new(Metrics::new());

        let mut handles = Vec::new();
        for _ in 0..100 {
            let metrics = metrics.clone();
            handles.push(tokio::spawn(async move {
                metrics.record("basic", 1.0).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let snapshot = metrics.snapshot().await;
        let basic = snapshot.get("basic").unwrap();
        assert_eq!(basic.request_count, 100);
        assert_eq!(basic.total_time_ms, 100.0);
        assert_eq!(metrics.average("basic").await, 1.0);
    }

    #[tokio::test]
    async fn test_engines_tracked_independently() {
        let metrics = Metrics::new();

        metrics.record("basic", 100.0).await;
        metrics.record("optimized", 1.0).await;
        metrics.record("optimized", 3.0).await;

        assert_eq!(metrics.average("basic").await, 100.0);
        assert_eq!(metrics.average("optimized").await, 2.0);

        let snapshot = metrics.snapshot().await;
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("basic").unwrap().request_count, 1);
        assert_eq!(snapshot.get("optimized").unwrap().request_count, 2);
    }

    #[tokio::test]
    async fn test_snapshot_empty_collector() {
        let metrics = Metrics::new();
        assert!(metrics.snapshot().await.is_empty());
    }

    #[test]
    fn test_engine_totals_average() {
        let mut totals = EngineTotals::default();
        assert_eq!(totals.average_ms(), 0.0);

        totals.apply(10.0);
        totals.apply(20.0);
        assert_eq!(totals.average_ms(), 15.0);
    }
}
