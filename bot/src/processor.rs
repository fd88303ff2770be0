//! Turns one JSON submission into a letter and a notification.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;
use visabot_docx_template::DocxTemplate;

use crate::config::BotConfig;
use crate::error::{ProcessError, Result};
use crate::notifier::{Notification, Notifier, SimulatedEmailNotifier};
use crate::record::Submission;

/// What a successful run produced.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutcome {
    /// The submission that was processed.
    pub source: PathBuf,

    /// The generated letter.
    pub document: PathBuf,

    /// The notification sent for the letter.
    pub notification: Notification,
}

/// Runs the parse → render → save → notify pipeline for a single file.
///
/// Nothing is kept between calls; the template is read from disk every
/// time so edits to it take effect on the next submission.
pub struct FileProcessor {
    config: BotConfig,
    notifier: Box<dyn Notifier>,
}

impl FileProcessor {
    /// Processor that records notifications in `config.sent_emails_dir`.
    pub fn new(config: BotConfig) -> Self {
        let notifier = SimulatedEmailNotifier::new(&config.sent_emails_dir);
        Self {
            config,
            notifier: Box::new(notifier),
        }
    }

    /// Replace the notifier.
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Process the submission at `path`.
    ///
    /// The letter is saved before the `email` field is looked at, so a
    /// submission without an address still gets its document.
    pub fn process(&self, path: &Path) -> Result<ProcessOutcome> {
        info!("Processing file: {}", path.display());

        let submission = read_submission(path)?;

        info!("Using template at: {}", self.config.template_path.display());
        let template = DocxTemplate::open(&self.config.template_path)?;
        let rendered = template.render(submission.context())?;

        let document = self.config.uploads_dir.join(submission.letter_file_name()?);
        rendered
            .save(&document)
            .map_err(|source| ProcessError::Save {
                path: document.clone(),
                source,
            })?;
        info!("Visa letter generated: {}", document.display());

        let notification = self.notifier.notify(submission.email()?, &document)?;

        Ok(ProcessOutcome {
            source: path.to_path_buf(),
            document,
            notification,
        })
    }
}

fn read_submission(path: &Path) -> Result<Submission> {
    let content = std::fs::read_to_string(path).map_err(|source| ProcessError::Access {
        path: path.to_path_buf(),
        source,
    })?;

    let value = serde_json::from_str(&content).map_err(|source| ProcessError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Submission::from_value(value).ok_or_else(|| ProcessError::NotAnObject {
        path: path.to_path_buf(),
    })
}
