//! Delta output types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A flat configuration: string keys to arbitrary JSON values, key order kept
pub type Mapping = serde_json::Map<String, Value>;

/// A key present only on the target side
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Addition {
    pub key: String,
    pub value: Value,
}

/// A key present on both sides with different values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Update {
    pub key: String,
    pub from: Value,
    pub to: Value,
}

/// The structural difference between a base and a target mapping
///
/// A well-formed record names each key in at most one category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeltaRecord {
    pub additions: Vec<Addition>,
    /// Keys present only on the base side
    pub deletions: Vec<String>,
    pub updates: Vec<Update>,
}

impl DeltaRecord {
    /// True when base and target were equal
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.deletions.is_empty() && self.updates.is_empty()
    }

    /// Total number of entries across all three categories
    pub fn change_count(&self) -> usize {
        self.additions.len() + self.deletions.len() + self.updates.len()
    }
}
