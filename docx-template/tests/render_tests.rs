//! End-to-end tests: template file on disk → rendered file on disk.

use std::io::{Cursor, Read, Write};
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use visabot_docx_template::{DocxTemplate, MAIN_PART, TemplateError};
use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

const BODY: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
    "<w:p><w:r><w:t>Dear {{ na</w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>me }},</w:t></w:r></w:p>",
    "<w:p><w:r><w:t>We will reply to {{ email }}.</w:t></w:r></w:p>",
    "</w:body></w:document>",
);

const HEADER: &str = "<w:hdr><w:p><w:r><w:t>Ref: {{ reference }}</w:t></w:r></w:p></w:hdr>";

fn write_docx(path: &Path, parts: &[(&str, &str)]) {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        writer.start_file(*name, FileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    let bytes = writer.finish().unwrap().into_inner();
    std::fs::write(path, bytes).unwrap();
}

fn read_part(path: &Path, name: &str) -> String {
    let bytes = std::fs::read(path).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut text = String::new();
    file.read_to_string(&mut text).unwrap();
    text
}

fn fixture(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("visa_template.docx");
    write_docx(
        &path,
        &[
            ("[Content_Types].xml", "<Types/>"),
            (MAIN_PART, BODY),
            ("word/header1.xml", HEADER),
            ("word/styles.xml", "<w:styles>{{ not_rendered }}</w:styles>"),
        ],
    );
    path
}

#[test]
fn test_render_and_save_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let template_path = fixture(temp_dir.path());

    let template = DocxTemplate::open(&template_path).unwrap();
    assert_eq!(template.source(), Some(template_path.as_path()));
    assert_eq!(template.renderable_parts(), vec![MAIN_PART, "word/header1.xml"]);

    let data = serde_json::json!({
        "name": "Carlos Ray",
        "email": "carlos@example.com",
        "reference": 42,
        "unused": "ignored",
    });
    let output = temp_dir.path().join("visa_letter_carlos_ray.docx");
    template.render(&data).unwrap().save(&output).unwrap();

    let body = read_part(&output, MAIN_PART);
    assert!(body.contains("<w:t>Dear Carlos Ray,</w:t>"), "{body}");
    assert!(body.contains("We will reply to carlos@example.com."), "{body}");
    assert!(!body.contains("{{"));

    assert_eq!(
        read_part(&output, "word/header1.xml"),
        "<w:hdr><w:p><w:r><w:t>Ref: 42</w:t></w:r></w:p></w:hdr>"
    );
    assert_eq!(
        read_part(&output, "word/styles.xml"),
        "<w:styles>{{ not_rendered }}</w:styles>"
    );
    assert_eq!(read_part(&output, "[Content_Types].xml"), "<Types/>");
}

#[test]
fn test_fields_cover_body_and_header() {
    let temp_dir = TempDir::new().unwrap();
    let template = DocxTemplate::open(fixture(temp_dir.path())).unwrap();

    let fields: Vec<_> = template.fields().unwrap().into_iter().collect();
    assert_eq!(fields, vec!["email", "name", "reference"]);
}

#[test]
fn test_saving_twice_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let template = DocxTemplate::open(fixture(temp_dir.path())).unwrap();
    let output = temp_dir.path().join("out.docx");

    let first = serde_json::json!({"name": "A", "email": "a@x", "reference": 1});
    let second = serde_json::json!({"name": "B", "email": "b@x", "reference": 2});
    template.render(&first).unwrap().save(&output).unwrap();
    template.render(&second).unwrap().save(&output).unwrap();

    assert!(read_part(&output, MAIN_PART).contains("Dear B,"));
}

#[test]
fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let template = DocxTemplate::open(fixture(temp_dir.path())).unwrap();
    let output = temp_dir.path().join("letters/2026/out.docx");

    let context = serde_json::json!({"name": "A", "email": "a@x", "reference": 1});
    template.render(&context).unwrap().save(&output).unwrap();

    assert!(read_part(&output, MAIN_PART).contains("Dear A,"));
}

#[test]
fn test_missing_template_file() {
    let result = DocxTemplate::open("/nonexistent/path/12345/visa_template.docx");
    assert!(matches!(result, Err(TemplateError::Io(_))));
}

#[test]
fn test_corrupt_template_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("visa_template.docx");
    std::fs::write(&path, "not a zip").unwrap();

    assert!(matches!(DocxTemplate::open(&path), Err(TemplateError::Zip(_))));
}
