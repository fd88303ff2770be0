//! Recipient notification.
//!
//! Letters are not actually emailed. [`SimulatedEmailNotifier`] prints the
//! message it would have sent and records it as a text file, one per
//! recipient.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::error::NotifyError;
use crate::record::{is_plain_file_name, normalize_email};

/// Subject line of every notification.
pub const SUBJECT: &str = "Your Visa Support Letter";

/// Body text of every notification.
pub const BODY: &str = "Please find attached your visa support letter.";

/// A notification that was delivered (or recorded).
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub attachment: PathBuf,
    /// Where the record of this notification was written.
    pub log_path: PathBuf,
    pub sent_at: DateTime<Utc>,
}

impl Notification {
    /// Text written to the notification log.
    pub fn log_text(&self) -> String {
        format!(
            "TO: {}\nSUBJECT: {}\nBODY: {}\nATTACHMENT: {}\n",
            self.recipient,
            self.subject,
            self.body,
            self.attachment.display()
        )
    }
}

/// File name of the notification log for `recipient`.
pub fn log_file_name(recipient: &str) -> Result<String, NotifyError> {
    let normalized = normalize_email(recipient);
    if !is_plain_file_name(&normalized) {
        return Err(NotifyError::InvalidRecipient(recipient.to_string()));
    }
    Ok(format!("email_to_{normalized}.txt"))
}

/// Delivers a generated letter to its recipient.
pub trait Notifier: Send + Sync {
    /// Tell `recipient` that `attachment` is ready.
    fn notify(&self, recipient: &str, attachment: &Path) -> Result<Notification, NotifyError>;
}

/// Writes `email_to_<recipient>.txt` into a log directory instead of sending mail.
#[derive(Debug, Clone)]
pub struct SimulatedEmailNotifier {
    log_dir: PathBuf,
}

impl SimulatedEmailNotifier {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
        }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

impl Notifier for SimulatedEmailNotifier {
    fn notify(&self, recipient: &str, attachment: &Path) -> Result<Notification, NotifyError> {
        info!("Preparing to send email to: {recipient}");

        let log_path = self.log_dir.join(log_file_name(recipient)?);

        let notification = Notification {
            recipient: recipient.to_string(),
            subject: SUBJECT.to_string(),
            body: BODY.to_string(),
            attachment: attachment.to_path_buf(),
            log_path: log_path.clone(),
            sent_at: Utc::now(),
        };

        info!(
            "Simulated email sent:\nTo: {}\nSubject: {}\nBody: {}\nAttachment: {}",
            notification.recipient,
            notification.subject,
            notification.body,
            notification.attachment.display()
        );

        std::fs::create_dir_all(&self.log_dir).map_err(|source| {
            NotifyError::CreateDirectory {
                path: self.log_dir.clone(),
                source,
            }
        })?;
        std::fs::write(&log_path, notification.log_text()).map_err(|source| {
            NotifyError::WriteLog {
                path: log_path.clone(),
                source,
            }
        })?;

        info!("Email log saved to {}", log_path.display());
        Ok(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_writes_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("sent_emails");
        let notifier = SimulatedEmailNotifier::new(&log_dir);
        assert_eq!(notifier.log_dir(), log_dir.as_path());

        let notification = notifier
            .notify(
                "carlos@example.com",
                Path::new("uploads/visa_letter_carlos_ray.docx"),
            )
            .unwrap();

        assert_eq!(
            notification.log_path,
            log_dir.join("email_to_carlos_at_example.com.txt")
        );
        assert_eq!(
            std::fs::read_to_string(&notification.log_path).unwrap(),
            "TO: carlos@example.com\n\
             SUBJECT: Your Visa Support Letter\n\
             BODY: Please find attached your visa support letter.\n\
             ATTACHMENT: uploads/visa_letter_carlos_ray.docx\n"
        );
    }

    #[test]
    fn test_repeat_send_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let notifier = SimulatedEmailNotifier::new(temp_dir.path());

        notifier.notify("a@b.c", Path::new("first.docx")).unwrap();
        let second = notifier.notify("a@b.c", Path::new("second.docx")).unwrap();

        let logs: Vec<_> = std::fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(logs.len(), 1);
        assert!(
            std::fs::read_to_string(second.log_path)
                .unwrap()
                .contains("ATTACHMENT: second.docx")
        );
    }

    #[test]
    fn test_log_file_name() {
        assert_eq!(
            log_file_name("carlos@example.com").unwrap(),
            "email_to_carlos_at_example.com.txt"
        );
        assert!(matches!(
            log_file_name("a/b@example.com"),
            Err(NotifyError::InvalidRecipient(_))
        ));
    }

    #[test]
    fn test_log_dir_blocked_by_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocked = temp_dir.path().join("sent_emails");
        std::fs::write(&blocked, "not a directory").unwrap();

        let result = SimulatedEmailNotifier::new(&blocked).notify("a@b.c", Path::new("x.docx"));
        assert!(matches!(result, Err(NotifyError::CreateDirectory { .. })));
    }
}
