use std::fmt;
use std::str::FromStr;

use crate::errors::{ClassForgeError, Result};

/// Separator between the lower and upper bound of a range literal
pub const RANGE_SEPARATOR: &str = "..";

/// Cardinality bounds parsed from a multiplicity literal
///
/// Bounds stay textual: `*` and other open markers pass through untouched
/// and are emitted as-is in metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiplicity {
    pub min: String,
    pub max: String,
}

impl Multiplicity {
    /// Parse `"n"` (min = max = n) or `"min..max"`
    ///
    /// # Errors
    ///
    /// Returns `InvalidMultiplicity` for an empty literal, a range with an
    /// empty side, or a literal with more than one separator.
    pub fn parse(literal: &str) -> Result<Self> {
        let invalid = |reason: &str| ClassForgeError::InvalidMultiplicity {
            value: literal.to_string(),
            reason: reason.to_string(),
        };

        if literal.is_empty() {
            return Err(invalid("multiplicity is empty"));
        }

        match literal.split_once(RANGE_SEPARATOR) {
            None => Ok(Self::exactly(literal)),
            Some((_, max)) if max.contains(RANGE_SEPARATOR) => {
                Err(invalid("more than one range separator"))
            }
            Some((min, max)) if min.is_empty() || max.is_empty() => {
                Err(invalid("range bound is empty"))
            }
            Some((min, max)) => Ok(Self {
                min: min.to_string(),
                max: max.to_string(),
            }),
        }
    }

    /// Both bounds equal to `count`
    pub fn exactly(count: impl Into<String>) -> Self {
        let count = count.into();
        Self {
            min: count.clone(),
            max: count,
        }
    }

    /// The default cardinality of a leaf class: mandatory, single
    pub fn exactly_one() -> Self {
        Self::exactly("1")
    }
}

impl FromStr for Multiplicity {
    type Err = ClassForgeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}{}{}", self.min, RANGE_SEPARATOR, self.max)
        }
    }
}
