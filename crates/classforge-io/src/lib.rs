//! ClassForge IO - model parsing and artifact writing
//!
//! Provides:
//! - XML class-model reader (`Class`, `Attribute`, `Aggregation` elements)
//! - Configuration XML renderer for generated trees
//! - JSON mapping/delta readers and 4-space pretty writer
//! - The end-to-end artifact pipeline

pub mod atomic;
pub mod config_xml;
pub mod errors;
pub mod json;
pub mod model_xml;
pub mod pipeline;

// Re-export key types
pub use config_xml::render_config_xml;
pub use errors::Result;
pub use json::{read_delta, read_mapping, to_json_pretty, write_json_pretty};
pub use model_xml::{parse_model_file, parse_model_str};
pub use pipeline::{run, PipelineConfig, PipelineReport};
