//! Snapshot of a directory's direct entries.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, WatcherError};

/// List the names of the direct children of `dir`, sorted.
///
/// Files and subdirectories are both reported; nothing below the first
/// level is visited.
pub fn list_entries(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(WatcherError::DirectoryNotFound(dir.display().to_string()));
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            WatcherError::Io(
                e.into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
            )
        })?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    Ok(names)
}
