pub mod aggregation;
pub mod class;
pub mod class_model;
pub mod multiplicity;

pub use aggregation::AggregationEdge;
pub use class::{Attribute, ClassDef};
pub use class_model::ClassModel;
pub use multiplicity::Multiplicity;
