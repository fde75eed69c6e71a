//! Meta command
//!
//! Usage: classforge meta <MODEL> [--output <FILE>]

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct MetaArgs {
    /// Class model XML file
    pub model: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute meta command
pub fn execute(args: MetaArgs) -> Result<(), Box<dyn std::error::Error>> {
    let model = classforge_io::parse_model_file(&args.model)?;
    let meta = classforge_core::build_metadata(&model)?;
    let json = classforge_io::to_json_pretty(&meta)?;

    super::emit(&json, args.output.as_deref())
}
