//! Tree command
//!
//! Usage: classforge tree <MODEL> [--output <FILE>]

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Class model XML file
    pub model: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute tree command
pub fn execute(args: TreeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let model = classforge_io::parse_model_file(&args.model)?;
    let tree = classforge_core::build_tree(&model)?;
    let xml = classforge_io::render_config_xml(&tree)?;

    super::emit(&xml, args.output.as_deref())
}
