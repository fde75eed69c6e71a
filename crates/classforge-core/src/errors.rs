use classforge_core_types::RunId;
use thiserror::Error;

/// Result type alias using ClassForgeError
pub type Result<T> = std::result::Result<T, ClassForgeError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Model
    /// No class is flagged as root
    RootClassMissing,
    /// More than one class is flagged as root
    RootClassAmbiguous,
    /// An aggregation edge names a class that was never declared
    NotFound,
    /// Following aggregation edges re-entered a class on the current path
    CycleDetected,
    /// A multiplicity literal is neither a single token nor a `min..max` range
    InvalidMultiplicity,

    // Input
    InvalidInput,
    /// Model document is not well-formed XML
    InvalidModel,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::RootClassMissing => "ERR_ROOT_CLASS_MISSING",
            ExErrorKind::RootClassAmbiguous => "ERR_ROOT_CLASS_AMBIGUOUS",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::CycleDetected => "ERR_CYCLE_DETECTED",
            ExErrorKind::InvalidMultiplicity => "ERR_INVALID_MULTIPLICITY",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidModel => "ERR_INVALID_MODEL",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }

    /// True for the kinds that mean the class model has no usable root
    pub fn is_model_error(&self) -> bool {
        matches!(
            self,
            ExErrorKind::RootClassMissing | ExErrorKind::RootClassAmbiguous
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, class name, traversal path, run id) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    path: Option<Vec<String>>,
    run_id: Option<RunId>,
    message: String,
    source: Option<Box<ExError>>,
    candidates: Option<Vec<String>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            path: None,
            run_id: None,
            message: String::new(),
            source: None,
            candidates: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (a class name, a file path, a mapping key)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add the class path that was being traversed when the error occurred
    pub fn with_path(mut self, path: Vec<String>) -> Self {
        self.path = Some(path);
        self
    }

    /// Add run correlation context
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Add candidate class names (used for RootClassAmbiguous)
    pub fn with_candidates(mut self, names: Vec<String>) -> Self {
        self.candidates = Some(names);
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the traversal path, if any
    pub fn path(&self) -> Option<&[String]> {
        self.path.as_deref()
    }

    /// Get the run id, if any
    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }

    /// Get candidate class names, if any
    pub fn candidates(&self) -> Option<&[String]> {
        self.candidates.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity: {})", entity_id)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.join(" -> "))?;
        }
        if let Some(source) = &self.source {
            write!(f, "; caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for model transformation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassForgeError {
    // ===== Model Errors =====
    /// No class in the model is flagged `isRoot`
    #[error("No root class found: exactly one class must have isRoot=true")]
    RootClassNotFound,

    /// More than one class is flagged `isRoot`
    #[error("Multiple root classes found: {candidates:?}")]
    MultipleRootClasses { candidates: Vec<String> },

    /// An aggregation edge refers to a class that is not declared
    #[error("Class not found: {class_name}")]
    ClassNotFound { class_name: String },

    // ===== Structural Errors =====
    /// Aggregation edges loop back onto a class already on the current path
    #[error("Cycle detected at class {class_name} (path: {})", .path.join(" -> "))]
    CycleDetected {
        class_name: String,
        path: Vec<String>,
    },

    // ===== Validation Errors =====
    /// Multiplicity literal could not be split into min/max
    #[error("Invalid multiplicity {value:?}: {reason}")]
    InvalidMultiplicity { value: String, reason: String },
}

impl From<ClassForgeError> for ExError {
    fn from(err: ClassForgeError) -> Self {
        match err {
            ClassForgeError::RootClassNotFound => ExError::new(ExErrorKind::RootClassMissing)
                .with_message("No class is flagged isRoot=true"),

            ClassForgeError::MultipleRootClasses { candidates } => {
                ExError::new(ExErrorKind::RootClassAmbiguous)
                    .with_message(format!(
                        "{} classes are flagged isRoot=true",
                        candidates.len()
                    ))
                    .with_candidates(candidates)
            }

            ClassForgeError::ClassNotFound { class_name } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(class_name)
                .with_message("Aggregation edge references an undeclared class"),

            ClassForgeError::CycleDetected { class_name, path } => {
                ExError::new(ExErrorKind::CycleDetected)
                    .with_entity_id(class_name)
                    .with_path(path)
                    .with_message("Aggregation edges form a cycle")
            }

            ClassForgeError::InvalidMultiplicity { value, reason } => {
                ExError::new(ExErrorKind::InvalidMultiplicity)
                    .with_entity_id(value)
                    .with_message(reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::RootClassMissing, "ERR_ROOT_CLASS_MISSING"),
            (ExErrorKind::RootClassAmbiguous, "ERR_ROOT_CLASS_AMBIGUOUS"),
            (ExErrorKind::CycleDetected, "ERR_CYCLE_DETECTED"),
            (ExErrorKind::InvalidMultiplicity, "ERR_INVALID_MULTIPLICITY"),
            (ExErrorKind::InvalidModel, "ERR_INVALID_MODEL"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_root_kinds_are_model_errors() {
        assert!(ExErrorKind::RootClassMissing.is_model_error());
        assert!(ExErrorKind::RootClassAmbiguous.is_model_error());
        assert!(!ExErrorKind::CycleDetected.is_model_error());
    }

    #[test]
    fn test_ex_error_candidates_field() {
        let err = ClassForgeError::MultipleRootClasses {
            candidates: vec!["A".into(), "B".into()],
        };
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::RootClassAmbiguous);
        assert_eq!(ex.candidates(), Some(&["A".to_string(), "B".to_string()][..]));
    }

    #[test]
    fn test_ex_error_candidates_none_by_default() {
        let err = ExError::new(ExErrorKind::NotFound);
        assert!(err.candidates().is_none());
        assert!(err.path().is_none());
    }

    #[test]
    fn test_cycle_display_shows_path() {
        let err = ClassForgeError::CycleDetected {
            class_name: "A".into(),
            path: vec!["Root".into(), "A".into(), "B".into()],
        };
        assert_eq!(
            err.to_string(),
            "Cycle detected at class A (path: Root -> A -> B)"
        );
    }

    #[test]
    fn test_display_includes_source() {
        let inner = ExError::new(ExErrorKind::Io).with_message("disk full");
        let outer = ExError::new(ExErrorKind::Serialization)
            .with_op("pipeline_run")
            .with_source(inner);
        let text = outer.to_string();
        assert!(text.starts_with("[ERR_SERIALIZATION] in operation 'pipeline_run'"));
        assert!(text.contains("caused by [ERR_IO]: disk full"));
    }
}
