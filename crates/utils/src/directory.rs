//! Non-recursive directory listing

use commonkit_core::{Error, Result};
use std::fs;
use std::path::Path;

/// List the non-directory entries of `folder`, each name prefixed with
/// the folder path and a `/` separator.
///
/// Subdirectories are skipped, never descended into. The result is
/// sorted so the listing is deterministic across platforms.
pub fn list_files(folder: impl AsRef<Path>) -> Result<Vec<String>> {
    let folder = folder.as_ref();
    let entries = fs::read_dir(folder)
        .map_err(|e| Error::file_system(folder.to_path_buf(), "read directory", e))?;

    let mut result = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| Error::file_system(folder.to_path_buf(), "read directory entry", e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| Error::file_system(entry.path(), "stat", e))?;

        if !file_type.is_dir() {
            result.push(format!(
                "{}/{}",
                folder.display(),
                entry.file_name().to_string_lossy()
            ));
        }
    }

    result.sort();
    Ok(result)
}
