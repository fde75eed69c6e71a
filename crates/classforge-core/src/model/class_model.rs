use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::{ClassForgeError, Result};
use crate::model::{AggregationEdge, ClassDef};

/// In-memory class/aggregation model
///
/// Classes keep declaration order (metadata is emitted in that order) and
/// edges keep declaration order (tree children are emitted in that order).
/// The model is never validated as a whole: duplicate names overwrite, and
/// dangling or cyclic edges only surface when the tree is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassModel {
    classes: IndexMap<String, ClassDef>,
    aggregations: Vec<AggregationEdge>,
}

impl ClassModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a class
    ///
    /// Re-declaring a name replaces the earlier definition but keeps its
    /// original position.
    pub fn add_class(&mut self, class: ClassDef) {
        self.classes.insert(class.name.clone(), class);
    }

    /// Declare an aggregation edge
    pub fn add_aggregation(&mut self, edge: AggregationEdge) {
        self.aggregations.push(edge);
    }

    /// Builder form of [`add_class`](Self::add_class)
    pub fn with_class(mut self, class: ClassDef) -> Self {
        self.add_class(class);
        self
    }

    /// Builder form of [`add_aggregation`](Self::add_aggregation)
    pub fn with_aggregation(mut self, edge: AggregationEdge) -> Self {
        self.add_aggregation(edge);
        self
    }

    /// Look up a class by name
    pub fn class(&self, name: &str) -> Option<&ClassDef> {
        self.classes.get(name)
    }

    /// Look up a class by name
    ///
    /// # Errors
    ///
    /// Returns `ClassNotFound` if no class has that name.
    pub fn get_class(&self, name: &str) -> Result<&ClassDef> {
        self.classes
            .get(name)
            .ok_or_else(|| ClassForgeError::ClassNotFound {
                class_name: name.to_string(),
            })
    }

    /// All classes in declaration order
    pub fn classes(&self) -> impl Iterator<Item = &ClassDef> {
        self.classes.values()
    }

    /// All aggregation edges in declaration order
    pub fn aggregations(&self) -> &[AggregationEdge] {
        &self.aggregations
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.aggregations.len()
    }

    /// Edges whose `target` is `parent`, in declaration order
    pub fn children_of<'a>(
        &'a self,
        parent: &'a str,
    ) -> impl Iterator<Item = &'a AggregationEdge> + 'a {
        self.aggregations.iter().filter(move |e| e.target == parent)
    }

    /// The unique class flagged `isRoot`
    ///
    /// # Errors
    ///
    /// Returns `RootClassNotFound` if no class is flagged, or
    /// `MultipleRootClasses` (with all flagged names) if more than one is.
    pub fn root_class(&self) -> Result<&ClassDef> {
        let mut roots = self.classes.values().filter(|c| c.is_root);
        let first = roots.next().ok_or(ClassForgeError::RootClassNotFound)?;

        let rest: Vec<&ClassDef> = roots.collect();
        if !rest.is_empty() {
            let candidates = std::iter::once(first)
                .chain(rest)
                .map(|c| c.name.clone())
                .collect();
            return Err(ClassForgeError::MultipleRootClasses { candidates });
        }

        Ok(first)
    }
}
