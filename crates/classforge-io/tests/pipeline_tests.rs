mod common;

use std::fs;

use classforge_core::{DeltaRecord, ExErrorKind};
use classforge_io::pipeline::{
    CONFIG_XML_FILE, DELTA_JSON_FILE, META_JSON_FILE, PATCHED_CONFIG_FILE,
};
use classforge_io::{read_delta, read_mapping, run};
use common::{standard_inputs, write_file, BTS_CONFIG_XML};
use serde_json::{json, Value};
use tempfile::TempDir;

#[test]
fn test_run_writes_all_artifacts() {
    let dir = TempDir::new().unwrap();
    let config = standard_inputs(dir.path());

    let report = run(&config).unwrap();

    let out = dir.path().join("out");
    assert_eq!(
        report.artifacts,
        vec![
            out.join(CONFIG_XML_FILE),
            out.join(META_JSON_FILE),
            out.join(DELTA_JSON_FILE),
            out.join(PATCHED_CONFIG_FILE),
        ]
    );
    for artifact in &report.artifacts {
        assert!(artifact.is_file(), "{} missing", artifact.display());
    }
    assert!(report.round_trip_ok);
    assert_eq!(report.descriptor_count, 6);
    assert_eq!(report.change_count, 3);
}

#[test]
fn test_run_artifact_contents() {
    let dir = TempDir::new().unwrap();
    let config = standard_inputs(dir.path());
    let out = dir.path().join("out");

    run(&config).unwrap();

    assert_eq!(
        fs::read_to_string(out.join(CONFIG_XML_FILE)).unwrap(),
        BTS_CONFIG_XML
    );

    let delta: Value =
        serde_json::from_str(&fs::read_to_string(out.join(DELTA_JSON_FILE)).unwrap()).unwrap();
    assert_eq!(
        delta,
        json!({
            "additions": [{"key": "logLevel", "value": "debug"}],
            "deletions": ["retries"],
            "updates": [{"key": "timeout", "from": 30, "to": 60}]
        })
    );

    let patched = read_mapping(&out.join(PATCHED_CONFIG_FILE)).unwrap();
    assert_eq!(patched, read_mapping(&config.patched_config_path).unwrap());
    let keys: Vec<&str> = patched.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["timeout", "mode", "logLevel"]);
}

#[test]
fn test_meta_json_is_four_space_indented() {
    let dir = TempDir::new().unwrap();
    let config = standard_inputs(dir.path());

    run(&config).unwrap();

    let text = fs::read_to_string(dir.path().join("out").join(META_JSON_FILE)).unwrap();
    assert!(text.starts_with("[\n    {\n        \"class\": \"BTS\","));
    let meta: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(meta[0]["isRoot"], json!(true));
    assert_eq!(meta[2]["min"], json!("1"));
}

#[test]
fn test_delta_artifact_reads_back() {
    let dir = TempDir::new().unwrap();
    let config = standard_inputs(dir.path());

    run(&config).unwrap();

    let delta: DeltaRecord = read_delta(&dir.path().join("out").join(DELTA_JSON_FILE)).unwrap();
    assert_eq!(delta.change_count(), 3);
}

#[test]
fn test_rerun_overwrites_outputs() {
    let dir = TempDir::new().unwrap();
    let mut config = standard_inputs(dir.path());
    run(&config).unwrap();

    config.patched_config_path = write_file(dir.path(), "same.json", common::BASE_CONFIG_JSON);
    let report = run(&config).unwrap();

    assert_eq!(report.change_count, 0);
    let delta = read_delta(&dir.path().join("out").join(DELTA_JSON_FILE)).unwrap();
    assert!(delta.is_empty());
}

#[test]
fn test_model_without_root_fails_with_run_id() {
    let dir = TempDir::new().unwrap();
    let mut config = standard_inputs(dir.path());
    config.model_path = write_file(dir.path(), "rootless.xml", r#"<M><Class name="A"/></M>"#);

    let err = run(&config).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::RootClassMissing);
    assert_eq!(err.op(), Some("pipeline_run"));
    assert!(err.run_id().is_some());
    assert!(!dir.path().join("out").join(CONFIG_XML_FILE).exists());
}

#[test]
fn test_non_object_config_fails() {
    let dir = TempDir::new().unwrap();
    let mut config = standard_inputs(dir.path());
    config.config_path = write_file(dir.path(), "list.json", "[1, 2, 3]");

    let err = run(&config).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
}
