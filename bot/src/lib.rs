//! # Visa Letter Bot
//!
//! Watches an uploads folder for JSON submissions and turns each one into
//! a Word letter plus a (simulated) email notification.
//!
//! ```text
//! uploads/*.json ──► DirectoryWatcher ──► EventDispatcher ──► FileProcessor
//!                                                              │
//!                        visa_template.docx ──► DocxTemplate ◄─┤
//!                                                              ▼
//!                 uploads/visa_letter_<name>.docx     Notifier ──► sent_emails/
//! ```

pub mod config;
pub mod daemon;
pub mod dispatcher;
pub mod error;
pub mod notifier;
pub mod processor;
pub mod record;

#[cfg(test)]
mod test_support;

pub use config::BotConfig;
pub use dispatcher::{Dispatch, DispatchStats, EventDispatcher, classify};
pub use error::{NotifyError, ProcessError, Result};
pub use notifier::{Notification, Notifier, SimulatedEmailNotifier};
pub use processor::{FileProcessor, ProcessOutcome};
pub use record::Submission;
