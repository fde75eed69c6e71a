//! ClassForge CLI
//!
//! Command-line interface for ClassForge

use clap::{Parser, Subcommand, ValueEnum};
use classforge_core::logging_facility::{self, Profile};

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "classforge")]
#[command(
    about = "ClassForge - class models to configuration trees, metadata and deltas",
    long_about = None
)]
struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the configuration XML tree of a class model
    Tree(commands::tree::TreeArgs),
    /// Emit per-class metadata JSON for a class model
    Meta(commands::meta::MetaArgs),
    /// Compute the delta between two configuration files
    Delta(commands::delta::DeltaArgs),
    /// Apply a delta file to a base configuration
    Patch(commands::patch::PatchArgs),
    /// Run the full artifact pipeline
    Run(commands::run::RunArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_format.into());

    let result = match cli.command {
        Commands::Tree(args) => commands::tree::execute(args),
        Commands::Meta(args) => commands::meta::execute(args),
        Commands::Delta(args) => commands::delta::execute(args),
        Commands::Patch(args) => commands::patch::execute(args),
        Commands::Run(args) => commands::run::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
