//! Flat class descriptors with cardinality, one per declared class.

pub mod builder;
pub mod model;

pub use builder::build_metadata;
pub use model::{ClassDescriptor, Parameter, CLASS_PARAMETER_TYPE};
