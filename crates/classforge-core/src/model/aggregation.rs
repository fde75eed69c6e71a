use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::Multiplicity;

/// "`source` is nested inside `target`"
///
/// Multiplicities are kept as the literal strings of the input model and
/// parsed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationEdge {
    /// Child class name
    pub source: String,
    /// Parent class name
    pub target: String,
    #[serde(rename = "sourceMultiplicity")]
    pub source_multiplicity: String,
    #[serde(rename = "targetMultiplicity")]
    pub target_multiplicity: String,
}

impl AggregationEdge {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        source_multiplicity: impl Into<String>,
        target_multiplicity: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            source_multiplicity: source_multiplicity.into(),
            target_multiplicity: target_multiplicity.into(),
        }
    }

    /// How many `source` instances a `target` instance holds
    ///
    /// # Errors
    ///
    /// Returns `InvalidMultiplicity` if the literal is malformed.
    pub fn source_cardinality(&self) -> Result<Multiplicity> {
        Multiplicity::parse(&self.source_multiplicity)
    }
}
