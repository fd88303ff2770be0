//! # Docx Template
//!
//! Fills `{{ field }}` placeholders in Word documents from a JSON object.
//!
//! ```text
//! visa_template.docx ──► DocxTemplate ──render(json)──► RenderedDocument ──save──► .docx
//! ```
//!
//! Placeholders may appear in the main document body and in header and
//! footer parts. A placeholder Word has split across formatting runs is
//! merged back together before rendering.

mod archive;
pub mod document;
pub mod error;
mod placeholder;
pub mod template;

pub use document::RenderedDocument;
pub use error::{Result, TemplateError};
pub use template::{DocxTemplate, MAIN_PART};
