//! Nested configuration template built from a class model.
//!
//! The tree is rooted at the model's unique root class. Every class node
//! holds one leaf per declared attribute (leaf text = attribute type),
//! followed by one child node per aggregation edge pointing at the class.

pub mod builder;
pub mod node;

pub use builder::build_tree;
pub use node::TreeNode;
