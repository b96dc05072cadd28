// Crate-level lint configuration for pedantic clippy
#![allow(clippy::must_use_candidate)] // Server handlers don't need must_use
#![allow(clippy::missing_errors_doc)] // Handler errors are obvious from signatures
#![allow(clippy::module_name_repetitions)] // routes::FeatureResponse is clear
#![allow(clippy::uninlined_format_args)] // Named args are clearer
#![allow(clippy::cast_precision_loss)] // u64 to f64 is intentional in metrics
#![allow(clippy::significant_drop_tightening)] // Lock scopes are intentional
#![allow(clippy::unused_async)] // Handlers must be async for axum routing

//! Feature Store REST API Server Library
//!
//! Provides the REST routes and shared state for the feature store demo
//! server. Two retrieval paths serve the same derived features:
//!
//! - `/basic/{user_id}` computes features on demand against a simulated
//!   slow data store
//! - `/optimized/{user_id}` serves features precomputed at startup
//!   through a lazy per-user cache
//!
//! Both paths report per-request timing, running per-engine averages,
//! and process memory, so their performance can be compared live.

pub mod memory;
pub mod metrics;
pub mod routes;
