//! Atomic artifact writes
//!
//! Writes go to a sibling temp file which is then renamed over the target,
//! so a failed run never leaves a half-written artifact behind.

use std::fs;
use std::path::Path;

use crate::errors::{io_error, Result};

/// Atomically write bytes to a file, creating parent directories
///
/// # Errors
///
/// Returns `Io` if a directory, the temp file or the rename fails.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error("create_output_dir", parent, e))?;
    }

    let temp_path = target_path.with_extension("tmp");

    fs::write(&temp_path, content).map_err(|e| io_error("write_artifact_temp", &temp_path, e))?;
    fs::rename(&temp_path, target_path)
        .map_err(|e| io_error("rename_artifact_temp", target_path, e))?;

    Ok(())
}
