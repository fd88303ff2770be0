//! Rendered output documents.

use std::path::Path;

use tracing::debug;

use crate::archive::{self, ArchiveEntry};
use crate::error::Result;

/// A filled-in Word document, ready to be written to disk.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    entries: Vec<ArchiveEntry>,
}

impl RenderedDocument {
    pub(crate) fn new(entries: Vec<ArchiveEntry>) -> Self {
        Self { entries }
    }

    /// Text of a package member, if it exists and is valid UTF-8.
    pub fn part_text(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .and_then(|e| std::str::from_utf8(&e.data).ok())
    }

    /// Serialize the document as `.docx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        archive::write_entries(&self.entries)
    }

    /// Write the document to `path`, replacing any existing file and
    /// creating missing parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;

        debug!("Saved document to {}", path.display());
        Ok(())
    }
}
