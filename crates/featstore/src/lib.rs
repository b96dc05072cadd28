// Crate-level lint configuration for pedantic clippy
#![allow(clippy::must_use_candidate)] // Accessor methods don't need must_use
#![allow(clippy::missing_const_for_fn)] // const fn optimization is minor
#![allow(clippy::use_self)] // Self vs TypeName - style preference
#![allow(clippy::doc_markdown)] // Missing backticks - low priority
#![allow(clippy::missing_errors_doc)] // The single error kind is documented on the trait
#![allow(clippy::cast_precision_loss)] // usize to f64 is intentional
#![allow(clippy::cast_possible_truncation)] // Bounds checked at generation time
#![allow(clippy::module_name_repetitions)] // data::Dataset is clear

//! User feature store core
//!
//! Demonstrates two retrieval strategies over one synthetic user table:
//! - **OnDemandEngine**: recomputes features per call behind a simulated
//!   remote-store delay
//! - **PrecomputedEngine**: derives everything once up front and serves
//!   lookups from a lazily filled result cache
//!
//! Both implement [`FeatureEngine`] and share the formulas in
//! [`features`], so their outputs are identical; only the cost profile
//! differs. HTTP plumbing and metrics live in the server crate.

pub mod data;
pub mod engine;
pub mod error;
pub mod features;
pub mod ondemand;
pub mod precomputed;

pub use data::{Dataset, UserRecord};
pub use engine::FeatureEngine;
pub use error::{FeatureResult, FeatureStoreError};
pub use features::FeatureSet;
pub use ondemand::OnDemandEngine;
pub use precomputed::PrecomputedEngine;
