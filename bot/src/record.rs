//! Submission records and the file names derived from them.

use serde_json::Value as JsonValue;

use crate::error::{ProcessError, Result};

/// Field holding the applicant's name.
pub const NAME_FIELD: &str = "name";

/// Field holding the applicant's email address.
pub const EMAIL_FIELD: &str = "email";

/// A parsed JSON submission.
///
/// Only `name` and `email` are ever looked at; every field, known or not,
/// is handed to the template unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    fields: JsonValue,
}

impl Submission {
    /// Wrap a JSON value, which must be an object.
    pub fn from_value(value: JsonValue) -> Option<Self> {
        value.is_object().then_some(Self { fields: value })
    }

    /// All fields, as the template rendering context.
    pub fn context(&self) -> &JsonValue {
        &self.fields
    }

    /// The `name` field.
    pub fn name(&self) -> Result<&str> {
        self.string_field(NAME_FIELD)
    }

    /// The `email` field.
    pub fn email(&self) -> Result<&str> {
        self.string_field(EMAIL_FIELD)
    }

    /// File name of the letter generated for this submission.
    pub fn letter_file_name(&self) -> Result<String> {
        let name = self.name()?;
        let normalized = normalize_name(name);
        ensure_file_name_safe(NAME_FIELD, name, &normalized)?;
        Ok(format!("visa_letter_{normalized}.docx"))
    }

    fn string_field(&self, field: &'static str) -> Result<&str> {
        self.fields
            .get(field)
            .and_then(JsonValue::as_str)
            .ok_or(ProcessError::MissingField(field))
    }
}

/// Lower-case a name and replace spaces with underscores.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Replace `@` with `_at_` in an email address.
pub fn normalize_email(email: &str) -> String {
    email.replace('@', "_at_")
}

/// Whether a derived file name stays inside its directory.
pub fn is_plain_file_name(name: &str) -> bool {
    !name.contains(['/', '\\'])
}

fn ensure_file_name_safe(field: &'static str, raw: &str, normalized: &str) -> Result<()> {
    if !is_plain_file_name(normalized) {
        return Err(ProcessError::InvalidField {
            field,
            value: raw.to_string(),
        });
    }
    Ok(())
}
