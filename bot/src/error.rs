//! Error types for submission processing.

use std::path::PathBuf;

use thiserror::Error;
use visabot_docx_template::TemplateError;

/// Result type alias for processing a submission.
pub type Result<T> = std::result::Result<T, ProcessError>;

/// Why a submission produced no (or only partial) output.
///
/// Each variant corresponds to one stage of the pipeline, so callers can
/// tell a malformed file from a broken template or a failed log write.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The input file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid JSON.
    #[error("invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The input is valid JSON but not an object.
    #[error("{} does not contain a JSON object", .path.display())]
    NotAnObject { path: PathBuf },

    /// Template missing, corrupt, or referring to a field the submission lacks.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// A required field is absent or not a string.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A required field cannot be turned into a file name.
    #[error("field {field} cannot be used in a file name: {value:?}")]
    InvalidField { field: &'static str, value: String },

    /// The rendered letter could not be written.
    #[error("cannot save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: TemplateError,
    },

    /// The notification log could not be written.
    #[error("notification failed: {0}")]
    Notify(#[from] NotifyError),

    /// The blocking worker running the pipeline panicked or was cancelled.
    #[error("processing worker failed: {0}")]
    Worker(String),
}

impl ProcessError {
    /// Short name of the failing stage, for log fields.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Access { .. } => "access",
            Self::Parse { .. } | Self::NotAnObject { .. } => "parse",
            Self::Template(_) => "render",
            Self::MissingField(_) | Self::InvalidField { .. } => "field",
            Self::Save { .. } => "save",
            Self::Notify(_) => "notify",
            Self::Worker(_) => "worker",
        }
    }
}

/// Errors from writing a notification log.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The address cannot be turned into a log file name.
    #[error("recipient cannot be used in a file name: {0:?}")]
    InvalidRecipient(String),

    /// Failed to create the log directory.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the log file.
    #[error("failed to write {}: {source}", .path.display())]
    WriteLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
