//! Loading and rendering `.docx` templates.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::archive::{self, ArchiveEntry};
use crate::document::RenderedDocument;
use crate::error::{Result, TemplateError};
use crate::placeholder::PlaceholderScanner;

/// Main document part every package must contain.
pub const MAIN_PART: &str = "word/document.xml";

/// Whether a package member carries user-visible text that may hold placeholders.
fn is_renderable_part(name: &str) -> bool {
    if name == MAIN_PART {
        return true;
    }
    let Some(file) = name.strip_prefix("word/") else {
        return false;
    };
    (file.starts_with("header") || file.starts_with("footer"))
        && file.ends_with(".xml")
        && !file.contains('/')
}

/// A Word document whose text contains `{{ field }}` placeholders.
///
/// Rendering substitutes each placeholder with the matching value from a
/// JSON object. Every referenced field must be present; values are
/// XML-escaped on the way in.
#[derive(Debug, Clone)]
pub struct DocxTemplate {
    /// Where the template was loaded from, if it came from disk.
    source: Option<PathBuf>,

    /// Package members.
    entries: Vec<ArchiveEntry>,
}

impl DocxTemplate {
    /// Load a template from a `.docx` file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let mut template = Self::from_bytes(&bytes)?;
        template.source = Some(path.to_path_buf());

        debug!(
            "Loaded template {} ({} parts)",
            path.display(),
            template.entries.len()
        );
        Ok(template)
    }

    /// Load a template from the raw bytes of a `.docx` file.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let entries = archive::read_entries(bytes)?;

        if !entries.iter().any(|e| e.name == MAIN_PART) {
            return Err(TemplateError::MissingPart(MAIN_PART.to_string()));
        }

        Ok(Self {
            source: None,
            entries,
        })
    }

    /// Path the template was loaded from.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Names of the parts placeholders are substituted in.
    pub fn renderable_parts(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| !e.is_dir && is_renderable_part(&e.name))
            .map(|e| e.name.as_str())
            .collect()
    }

    /// Every field name referenced by the template.
    pub fn fields(&self) -> Result<BTreeSet<String>> {
        let scanner = PlaceholderScanner::new()?;
        let mut fields = BTreeSet::new();

        for entry in self.entries.iter().filter(|e| is_renderable_part(&e.name)) {
            let normalized = scanner.normalize(&entry.text()?);
            fields.extend(scanner.fields(&normalized));
        }

        Ok(fields)
    }

    /// Render the template with `context` as the field mapping.
    pub fn render(&self, context: &JsonValue) -> Result<RenderedDocument> {
        let scanner = PlaceholderScanner::new()?;

        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);

        let mut entries = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            if entry.is_dir || !is_renderable_part(&entry.name) {
                entries.push(entry.clone());
                continue;
            }

            let normalized = scanner.normalize(&entry.text()?);
            let rendered = handlebars.render_template(&normalized, context)?;
            debug!("Rendered part {}", entry.name);

            entries.push(ArchiveEntry {
                data: rendered.into_bytes(),
                ..entry.clone()
            });
        }

        Ok(RenderedDocument::new(entries))
    }
}
