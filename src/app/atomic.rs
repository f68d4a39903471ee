//! Atomic file replacement
//!
//! Content is written to `<name>.tmp` next to the target and renamed over
//! it, so readers see either the old file or the new one.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::constants::files;
use crate::errors::{WriteError, WriteResult};

/// Replace `output_path` with `contents` using temp file + rename
///
/// # Errors
///
/// Returns `WriteError::Write` if the temporary file cannot be written and
/// `WriteError::AtomicOperationFailed` if the rename fails. A failed rename
/// removes the temporary file.
pub fn write_atomic(output_path: &Path, contents: &str) -> WriteResult<()> {
    let temp_path = temp_path_for(output_path);

    fs::write(&temp_path, contents).map_err(|source| {
        error!("Failed to write temporary file: {}", source);
        WriteError::Write {
            path: temp_path.clone(),
            source,
        }
    })?;
    debug!("Wrote {} bytes to {}", contents.len(), temp_path.display());

    if let Err(source) = fs::rename(&temp_path, output_path) {
        error!("Failed to rename temporary file: {}", source);
        let _ = fs::remove_file(&temp_path);
        return Err(WriteError::AtomicOperationFailed {
            temp_path,
            final_path: output_path.to_path_buf(),
            source,
        });
    }

    Ok(())
}

/// Sibling temporary path used while writing `output_path`
pub fn temp_path_for(output_path: &Path) -> PathBuf {
    let mut name = output_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(files::TEMP_FILE_SUFFIX);
    output_path.with_file_name(name)
}
