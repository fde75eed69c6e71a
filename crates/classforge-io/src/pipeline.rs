//! End-to-end artifact pipeline
//!
//! One run reads a class model and a base/target configuration pair and
//! writes four artifacts into the output directory:
//!
//! | file                      | content                                  |
//! |---------------------------|------------------------------------------|
//! | `config.xml`              | configuration tree of the model          |
//! | `meta.json`               | one descriptor per class                 |
//! | `delta.json`              | base -> target delta                     |
//! | `res_patched_config.json` | base with the delta applied              |

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use classforge_core::classforge_core_types::RunId;
use classforge_core::{apply_delta, build_metadata, build_tree, compute_delta, ExError};
use classforge_core::{log_op_end, log_op_error, log_op_start};
use serde::{Deserialize, Serialize};

use crate::atomic::atomic_write;
use crate::config_xml::render_config_xml;
use crate::errors::{io_error, Result};
use crate::json::{read_mapping, write_json_pretty};
use crate::model_xml::parse_model_file;

pub const CONFIG_XML_FILE: &str = "config.xml";
pub const META_JSON_FILE: &str = "meta.json";
pub const DELTA_JSON_FILE: &str = "delta.json";
pub const PATCHED_CONFIG_FILE: &str = "res_patched_config.json";

/// Inputs and output location of a pipeline run
///
/// Every field has a default, so a partial TOML table is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Class model XML
    pub model_path: PathBuf,
    /// Base configuration mapping
    pub config_path: PathBuf,
    /// Target configuration mapping
    pub patched_config_path: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("impulse_test_input.xml"),
            config_path: PathBuf::from("config.json"),
            patched_config_path: PathBuf::from("patched_config.json"),
            output_dir: PathBuf::from("out"),
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub run_id: RunId,
    /// Written artifacts, in write order
    pub artifacts: Vec<PathBuf>,
    pub node_count: usize,
    pub descriptor_count: usize,
    pub change_count: usize,
    /// Whether applying the delta to the base reproduced the target
    pub round_trip_ok: bool,
}

/// Run the pipeline described by `config`
///
/// # Errors
///
/// Fails on the first unreadable input, model error or write failure.
/// Artifacts written before the failure are left in place. The error
/// carries the run id.
pub fn run(config: &PipelineConfig) -> Result<PipelineReport> {
    let run_id = RunId::new();
    log_op_start!(
        "pipeline_run",
        run_id = run_id.as_str(),
        model_path = %config.model_path.display(),
        output_dir = %config.output_dir.display()
    );
    let start = Instant::now();

    let report = run_impl(config, run_id.clone()).map_err(|e| {
        let e = e.with_run_id(run_id.clone());
        log_op_error!(
            "pipeline_run",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "pipeline_run",
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = report.run_id.as_str(),
        change_count = report.change_count,
        round_trip_ok = report.round_trip_ok
    );

    Ok(report)
}

fn run_impl(config: &PipelineConfig, run_id: RunId) -> Result<PipelineReport> {
    let out = config.output_dir.as_path();
    fs::create_dir_all(out).map_err(|e| io_error("create_output_dir", out, e))?;

    let mut artifacts = Vec::with_capacity(4);

    let model = parse_model_file(&config.model_path)?;

    let tree = build_tree(&model).map_err(|e| pipeline_error(e.into()))?;
    let xml = render_config_xml(&tree)?;
    artifacts.push(write_artifact(out, CONFIG_XML_FILE, |path| {
        atomic_write(path, xml.as_bytes())
    })?);

    let meta = build_metadata(&model).map_err(|e| pipeline_error(e.into()))?;
    artifacts.push(write_artifact(out, META_JSON_FILE, |path| {
        write_json_pretty(path, &meta)
    })?);

    let base = read_mapping(&config.config_path)?;
    let target = read_mapping(&config.patched_config_path)?;

    let delta = compute_delta(&base, &target);
    artifacts.push(write_artifact(out, DELTA_JSON_FILE, |path| {
        write_json_pretty(path, &delta)
    })?);

    let patched = apply_delta(&base, &delta);
    artifacts.push(write_artifact(out, PATCHED_CONFIG_FILE, |path| {
        write_json_pretty(path, &patched)
    })?);

    let round_trip_ok = patched == target;
    if !round_trip_ok {
        tracing::warn!(
            run_id = run_id.as_str(),
            "patched configuration differs from the target configuration"
        );
    }

    Ok(PipelineReport {
        run_id,
        artifacts,
        node_count: tree.node_count(),
        descriptor_count: meta.len(),
        change_count: delta.change_count(),
        round_trip_ok,
    })
}

fn write_artifact<F>(dir: &Path, file_name: &str, write: F) -> Result<PathBuf>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let path = dir.join(file_name);
    write(&path)?;
    tracing::debug!(path = %path.display(), "artifact written");
    Ok(path)
}

fn pipeline_error(err: ExError) -> ExError {
    err.with_op("pipeline_run")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = PipelineConfig::default();
        assert_eq!(config.model_path, PathBuf::from("impulse_test_input.xml"));
        assert_eq!(config.config_path, PathBuf::from("config.json"));
        assert_eq!(config.patched_config_path, PathBuf::from("patched_config.json"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: PipelineConfig =
            serde_json::from_value(serde_json::json!({"output_dir": "build"})).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("build"));
        assert_eq!(config.model_path, PathBuf::from("impulse_test_input.xml"));
    }
}
