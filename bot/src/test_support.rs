//! Template fixtures for unit tests.

use std::io::{Cursor, Write};
use std::path::Path;

use zip::ZipWriter;
use zip::write::FileOptions;

pub(crate) const LETTER_BODY: &str = concat!(
    "<w:document><w:body>",
    "<w:p><w:r><w:t>Dear {{ name }},</w:t></w:r></w:p>",
    "<w:p><w:r><w:t>Your letter will be sent to {{ email }}.</w:t></w:r></w:p>",
    "</w:body></w:document>",
);

/// Write a minimal `.docx` whose main part is `document_xml`.
pub(crate) fn write_template(path: &Path, document_xml: &str) {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("[Content_Types].xml", FileOptions::default())
        .unwrap();
    writer.write_all(b"<Types/>").unwrap();
    writer
        .start_file("word/document.xml", FileOptions::default())
        .unwrap();
    writer.write_all(document_xml.as_bytes()).unwrap();
    let bytes = writer.finish().unwrap().into_inner();
    std::fs::write(path, bytes).unwrap();
}
