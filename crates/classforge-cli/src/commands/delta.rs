//! Delta command
//!
//! Usage: classforge delta <BASE> <TARGET> [--output <FILE>] [--summary]

use clap::Args;
use classforge_core::delta::render_delta_summary;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DeltaArgs {
    /// Base configuration JSON
    pub base: PathBuf,

    /// Target configuration JSON
    pub target: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a human-readable summary instead of delta JSON
    #[arg(long)]
    pub summary: bool,
}

/// Execute delta command
pub fn execute(args: DeltaArgs) -> Result<(), Box<dyn std::error::Error>> {
    let base = classforge_io::read_mapping(&args.base)?;
    let target = classforge_io::read_mapping(&args.target)?;

    let delta = classforge_core::compute_delta(&base, &target);

    if args.summary {
        let summary = render_delta_summary(&delta);
        return super::emit(summary.trim_end(), args.output.as_deref());
    }

    let json = classforge_io::to_json_pretty(&delta)?;
    super::emit(&json, args.output.as_deref())
}
