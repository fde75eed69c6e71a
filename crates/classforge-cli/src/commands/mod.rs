pub mod delta;
pub mod meta;
pub mod patch;
pub mod run;
pub mod tree;

use std::path::Path;

/// Write `content` to `output` if given, otherwise print it to stdout
pub fn emit(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            println!("✓ Wrote {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
