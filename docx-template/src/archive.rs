//! In-memory view of a `.docx` ZIP package.

use std::io::{Cursor, Read, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::{Result, TemplateError};

/// One member of the package, kept in its original order.
#[derive(Debug, Clone)]
pub(crate) struct ArchiveEntry {
    pub name: String,
    pub data: Vec<u8>,
    pub compression: CompressionMethod,
    pub is_dir: bool,
}

impl ArchiveEntry {
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.data.clone()).map_err(|source| TemplateError::Encoding {
            part: self.name.clone(),
            source,
        })
    }
}

/// Read every member of a ZIP archive into memory.
pub(crate) fn read_entries(bytes: &[u8]) -> Result<Vec<ArchiveEntry>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut entries = Vec::with_capacity(archive.len());

    for index in 0..archive.len() {
        let mut file = archive.by_index(index)?;
        let mut data = Vec::with_capacity(usize::try_from(file.size()).unwrap_or_default());
        file.read_to_end(&mut data)?;

        entries.push(ArchiveEntry {
            name: file.name().to_string(),
            data,
            compression: file.compression(),
            is_dir: file.is_dir(),
        });
    }

    Ok(entries)
}

/// Write members back out as a ZIP archive.
///
/// Stored members stay stored; everything else is deflated.
pub(crate) fn write_entries(entries: &[ArchiveEntry]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for entry in entries {
        let method = match entry.compression {
            CompressionMethod::Stored => CompressionMethod::Stored,
            _ => CompressionMethod::Deflated,
        };
        let options = FileOptions::default().compression_method(method);

        if entry.is_dir {
            writer.add_directory(entry.name.as_str(), options)?;
        } else {
            writer.start_file(entry.name.as_str(), options)?;
            writer.write_all(&entry.data)?;
        }
    }

    Ok(writer.finish()?.into_inner())
}
