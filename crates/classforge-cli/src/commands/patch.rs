//! Patch command
//!
//! Usage: classforge patch <BASE> <DELTA> [--output <FILE>]

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PatchArgs {
    /// Base configuration JSON
    pub base: PathBuf,

    /// Delta JSON (additions, deletions, updates)
    pub delta: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute patch command
pub fn execute(args: PatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let base = classforge_io::read_mapping(&args.base)?;
    let delta = classforge_io::read_delta(&args.delta)?;

    let patched = classforge_core::apply_delta(&base, &delta);
    let json = classforge_io::to_json_pretty(&patched)?;

    super::emit(&json, args.output.as_deref())
}
