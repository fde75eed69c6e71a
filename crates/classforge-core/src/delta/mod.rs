//! Delta engine over flat key-value configurations.
//!
//! ## Entry points
//!
//! ```
//! use classforge_core::delta::{apply_delta, compute_delta, Mapping};
//! use serde_json::json;
//!
//! let base: Mapping = serde_json::from_value(json!({"a": 1, "b": 2})).unwrap();
//! let target: Mapping = serde_json::from_value(json!({"b": 3, "c": 4})).unwrap();
//!
//! let delta = compute_delta(&base, &target);
//! assert_eq!(apply_delta(&base, &delta), target);
//! ```
//!
//! ## Guarantees
//!
//! - **Round trip**: `apply_delta(base, &compute_delta(base, target)) == target`.
//! - **Minimality**: keys with equal values on both sides never appear.
//! - **Determinism**: additions follow the target's key order; deletions and
//!   updates follow the base's key order.

pub mod apply;
pub mod engine;
pub mod human_summary;
pub mod model;

pub use apply::apply_delta;
pub use engine::compute_delta;
pub use human_summary::render_delta_summary;
pub use model::{Addition, DeltaRecord, Mapping, Update};
