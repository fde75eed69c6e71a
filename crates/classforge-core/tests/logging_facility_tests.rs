//! Logging assertions run in their own test binary so the global capture
//! subscriber sees only these operations.

use classforge_core::classforge_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ADDITION_COUNT, FIELD_BASE_KEY_COUNT,
    FIELD_CHANGE_COUNT, FIELD_CLASS_COUNT, FIELD_DELETION_COUNT, FIELD_DESCRIPTOR_COUNT,
    FIELD_DURATION_MS, FIELD_EDGE_COUNT, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_KEY_COUNT,
    FIELD_NODE_COUNT, FIELD_ROOT_CLASS, FIELD_TARGET_KEY_COUNT, FIELD_UPDATE_COUNT,
};
use classforge_core::logging_facility::test_capture::init_test_capture;
use classforge_core::{
    apply_delta, build_metadata, build_tree, compute_delta, AggregationEdge, ClassDef,
    ClassModel, Mapping,
};
use serde_json::json;

#[test]
fn test_build_tree_logs_start_and_end() {
    let capture = init_test_capture();
    let model = ClassModel::new()
        .with_class(
            ClassDef::new("LoggingRootForTreeEnd")
                .root()
                .with_attribute("a", "int"),
        )
        .with_class(ClassDef::new("LoggingChildForTreeEnd"))
        .with_aggregation(AggregationEdge::new(
            "LoggingChildForTreeEnd",
            "LoggingRootForTreeEnd",
            "1",
            "1",
        ));

    build_tree(&model).unwrap();

    assert!(capture
        .events_for("build_tree", EVENT_START)
        .iter()
        .any(|e| e.field(FIELD_CLASS_COUNT) == Some("2") && e.field(FIELD_EDGE_COUNT) == Some("1")));
    let ends: Vec<_> = capture
        .events_for("build_tree", EVENT_END)
        .into_iter()
        .filter(|e| e.field(FIELD_ROOT_CLASS) == Some("LoggingRootForTreeEnd"))
        .collect();
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].field(FIELD_NODE_COUNT), Some("3"));
    assert!(ends[0].field(FIELD_DURATION_MS).is_some());
}

#[test]
fn test_build_tree_failure_logs_error_code() {
    let capture = init_test_capture();
    let model = ClassModel::new().with_class(ClassDef::new("NotRoot"));

    build_tree(&model).unwrap_err();

    let errors = capture.events_for("build_tree", EVENT_END_ERROR);
    assert!(errors.iter().any(|e| {
        e.field(FIELD_ERR_CODE) == Some("ERR_ROOT_CLASS_MISSING")
            && e.field(FIELD_ERR_KIND) == Some("RootClassMissing")
    }));
    assert!(errors.iter().all(|e| e.level == tracing::Level::ERROR));
}

#[test]
fn test_metadata_logs_descriptor_count() {
    let capture = init_test_capture();
    let model = ClassModel::new()
        .with_class(ClassDef::new("M1"))
        .with_class(ClassDef::new("M2"))
        .with_class(ClassDef::new("M3"));

    build_metadata(&model).unwrap();

    assert!(capture
        .events_for("build_metadata", EVENT_END)
        .iter()
        .any(|e| e.field(FIELD_DESCRIPTOR_COUNT) == Some("3")));
}

#[test]
fn test_delta_operations_log_counts() {
    let capture = init_test_capture();
    let base: Mapping = serde_json::from_value(json!({"a": 1, "b": 2})).unwrap();
    let target: Mapping = serde_json::from_value(json!({"b": 3, "c": 4, "d": 5})).unwrap();

    let delta = compute_delta(&base, &target);
    apply_delta(&base, &delta);

    assert!(capture
        .events_for("compute_delta", EVENT_START)
        .iter()
        .any(|e| e.field(FIELD_BASE_KEY_COUNT) == Some("2")
            && e.field(FIELD_TARGET_KEY_COUNT) == Some("3")));
    assert!(capture
        .events_for("compute_delta", EVENT_END)
        .iter()
        .any(|e| e.field(FIELD_ADDITION_COUNT) == Some("2")
            && e.field(FIELD_DELETION_COUNT) == Some("1")
            && e.field(FIELD_UPDATE_COUNT) == Some("1")));
    assert!(capture
        .events_for("apply_delta", EVENT_START)
        .iter()
        .any(|e| e.field(FIELD_BASE_KEY_COUNT) == Some("2")
            && e.field(FIELD_CHANGE_COUNT) == Some("4")));
    assert!(capture
        .events_for("apply_delta", EVENT_END)
        .iter()
        .any(|e| e.field(FIELD_KEY_COUNT) == Some("3")));
}
