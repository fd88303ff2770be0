//! Paths and timings for the bot.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use visabot_directory_watcher::WatchConfig;

/// Name of the watched directory, next to the executable.
pub const UPLOADS_DIR_NAME: &str = "uploads";

/// Name of the letter template, next to the executable.
pub const TEMPLATE_FILE_NAME: &str = "visa_template.docx";

/// Directory notification logs are written to, relative to the working directory.
pub const SENT_EMAILS_DIR: &str = "sent_emails";

/// Submission processed once at startup when present.
pub const TEST_FILE_NAME: &str = "carlos_test.json";

/// Pause between two status lines of the idle loop.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Configuration shared by the processor, notifier and lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Directory watched for `*.json` submissions; letters are written here too.
    pub uploads_dir: PathBuf,

    /// Word template the letters are rendered from.
    pub template_path: PathBuf,

    /// Directory simulated email logs are written to.
    pub sent_emails_dir: PathBuf,

    /// File name processed once at startup if it exists in `uploads_dir`.
    pub test_file_name: String,

    /// Idle loop interval in milliseconds.
    pub poll_interval_ms: u64,
}

impl BotConfig {
    /// Lay the bot out around `base_dir`: uploads and template live inside it,
    /// notification logs go to `sent_emails/` under the working directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref();
        Self {
            uploads_dir: base_dir.join(UPLOADS_DIR_NAME),
            template_path: base_dir.join(TEMPLATE_FILE_NAME),
            sent_emails_dir: PathBuf::from(SENT_EMAILS_DIR),
            test_file_name: TEST_FILE_NAME.to_string(),
            poll_interval_ms: duration_ms(DEFAULT_POLL_INTERVAL),
        }
    }

    /// Layout rooted at the directory holding the running executable.
    pub fn from_executable() -> std::io::Result<Self> {
        let exe = std::env::current_exe()?;
        let base_dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self::new(base_dir))
    }

    /// Set the watched directory.
    pub fn with_uploads_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.uploads_dir = dir.into();
        self
    }

    /// Set the template path.
    pub fn with_template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = path.into();
        self
    }

    /// Set the notification log directory.
    pub fn with_sent_emails_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.sent_emails_dir = dir.into();
        self
    }

    /// Set the idle loop interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval_ms = duration_ms(interval);
        self
    }

    /// Idle loop interval.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    /// Full path of the startup test submission.
    pub fn test_file(&self) -> PathBuf {
        self.uploads_dir.join(&self.test_file_name)
    }

    /// Non-recursive watch on the uploads directory.
    pub fn watch_config(&self) -> WatchConfig {
        WatchConfig::new(&self.uploads_dir)
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
