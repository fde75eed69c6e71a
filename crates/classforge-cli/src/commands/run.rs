//! Run command
//!
//! Usage: classforge run [--config <FILE>] [--model <FILE>] [--base <FILE>]
//!                       [--target <FILE>] [--out-dir <DIR>]

use clap::Args;
use std::path::PathBuf;

use crate::config::{load_config, PipelineOverrides};

#[derive(Debug, Args)]
pub struct RunArgs {
    /// TOML configuration file (default: ./classforge.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Class model XML file
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Base configuration JSON
    #[arg(long)]
    pub base: Option<PathBuf>,

    /// Target configuration JSON
    #[arg(long)]
    pub target: Option<PathBuf>,

    /// Directory for generated artifacts
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

/// Execute run command
pub fn execute(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let file_config = load_config(args.config.as_deref())?;
    let pipeline = PipelineOverrides {
        model_path: args.model,
        config_path: args.base,
        patched_config_path: args.target,
        output_dir: args.out_dir,
    }
    .apply(file_config.pipeline);

    let report = classforge_io::run(&pipeline)?;

    for artifact in &report.artifacts {
        println!("✓ Wrote {}", artifact.display());
    }
    println!(
        "run {}: {} tree node(s), {} class descriptor(s), {} change(s)",
        report.run_id, report.node_count, report.descriptor_count, report.change_count
    );
    if !report.round_trip_ok {
        return Err("patched configuration does not match the target configuration".into());
    }

    Ok(())
}
