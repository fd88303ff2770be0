//! Error types for template rendering.

use thiserror::Error;

/// Result type alias for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Errors that can occur while loading, rendering or saving a template.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a readable ZIP archive.
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A part every Word document needs is absent.
    #[error("missing document part: {0}")]
    MissingPart(String),

    /// An XML part is not valid UTF-8.
    #[error("invalid encoding in {part}: {source}")]
    Encoding {
        part: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Placeholder substitution failed, e.g. a field missing from the context.
    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Internal pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex_lite::Error),
}
