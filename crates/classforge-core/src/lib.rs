//! classforge core - pure model transformations
//!
//! This crate turns a flat class/aggregation model into derived artifacts
//! and diffs flat configurations:
//! - Class model types (classes, attributes, aggregation edges, multiplicity)
//! - Tree builder: nested configuration template rooted at the root class
//! - Metadata builder: one descriptor per class with cardinality
//! - Delta engine and patch applier over flat JSON mappings
//!
//! Nothing here performs I/O; reading models and writing artifacts lives in
//! `classforge-io`.

pub mod delta;
pub mod errors;
pub mod logging_facility;
pub mod metadata;
pub mod model;
pub mod tree;

// Used by the exported logging macros
pub use classforge_core_types;

// Re-export commonly used types
pub use delta::{apply_delta, compute_delta, DeltaRecord, Mapping};
pub use errors::{ClassForgeError, ExError, ExErrorKind, Result};
pub use metadata::{build_metadata, ClassDescriptor};
pub use model::{AggregationEdge, Attribute, ClassDef, ClassModel, Multiplicity};
pub use tree::{build_tree, TreeNode};
