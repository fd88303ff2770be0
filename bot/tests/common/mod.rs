//! Shared helpers for the bot integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::Path;
use std::time::Duration;

use tempfile::TempDir;
use visabot::BotConfig;
use zip::ZipWriter;
use zip::write::FileOptions;

pub const LETTER_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "<w:document><w:body>",
    "<w:p><w:r><w:t>To whom it may concern: {{ name }}</w:t></w:r></w:p>",
    "<w:p><w:r><w:t>Contact: {{ email }}</w:t></w:r></w:p>",
    "</w:body></w:document>",
);

/// Write a minimal `.docx` template referencing `name` and `email`.
pub fn write_template(path: &Path) {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("[Content_Types].xml", FileOptions::default())
        .unwrap();
    writer.write_all(b"<Types/>").unwrap();
    writer
        .start_file("word/document.xml", FileOptions::default())
        .unwrap();
    writer.write_all(LETTER_XML.as_bytes()).unwrap();
    std::fs::write(path, writer.finish().unwrap().into_inner()).unwrap();
}

/// Config rooted in a fresh temp dir, with a template in place and a short poll interval.
pub fn test_config() -> (TempDir, BotConfig) {
    let temp_dir = TempDir::new().unwrap();
    let config = BotConfig::new(temp_dir.path())
        .with_sent_emails_dir(temp_dir.path().join("sent_emails"))
        .with_poll_interval(Duration::from_millis(100));
    write_template(&config.template_path);
    (temp_dir, config)
}

/// Poll `condition` until it holds or ten seconds pass.
pub async fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    condition()
}

/// Names of the `.docx` files in `dir`, sorted.
pub fn letters_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".docx"))
        .collect();
    names.sort();
    names
}
