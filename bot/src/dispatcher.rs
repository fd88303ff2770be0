//! Filters watcher events and hands JSON submissions to the processor.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use visabot_directory_watcher::{FileEvent, FileEventKind};

use crate::error::{ProcessError, Result};
use crate::processor::{FileProcessor, ProcessOutcome};

/// Extension of submission files.
pub const SUBMISSION_EXTENSION: &str = "json";

/// What the dispatcher decided to do with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Hand the file to the processor.
    Process,
    /// Not a creation or modification.
    IgnoredKind,
    /// The event concerns a directory.
    IgnoredDirectory,
    /// The file is not a `.json` submission.
    IgnoredNonJson,
    /// The file is gone by the time the event is handled.
    Missing,
    /// The file exists but cannot be opened for reading.
    Unreadable,
}

/// Decide whether an event should be processed.
pub fn classify(event: &FileEvent) -> Dispatch {
    if !event.kind.is_content_change() {
        return Dispatch::IgnoredKind;
    }
    if event.is_directory() {
        return Dispatch::IgnoredDirectory;
    }
    if !event.has_extension(SUBMISSION_EXTENSION) {
        return Dispatch::IgnoredNonJson;
    }
    if !event.path.exists() {
        return Dispatch::Missing;
    }
    if !is_readable(&event.path) {
        return Dispatch::Unreadable;
    }
    Dispatch::Process
}

fn is_readable(path: &Path) -> bool {
    std::fs::File::open(path).is_ok()
}

/// Counters reported when the dispatch loop ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DispatchStats {
    pub received: usize,
    pub ignored: usize,
    pub processed: usize,
    pub failed: usize,
}

/// Consumes file events and runs the processor for each submission.
///
/// Errors never escape: a failing file is logged and the next event is
/// handled as usual.
#[derive(Clone)]
pub struct EventDispatcher {
    processor: Arc<FileProcessor>,
}

impl EventDispatcher {
    pub fn new(processor: Arc<FileProcessor>) -> Self {
        Self { processor }
    }

    /// Handle one event. Returns `None` when the event was filtered out.
    pub async fn handle(&self, event: FileEvent) -> Option<Result<ProcessOutcome>> {
        let path = event.path.display().to_string();
        let created = event.kind == FileEventKind::Created;

        match classify(&event) {
            Dispatch::Process => {
                if created {
                    info!("New file detected: {path}");
                } else {
                    info!("Modified file detected: {path}");
                }
            }
            Dispatch::IgnoredKind => {
                debug!("Ignored {} event: {path}", event.kind);
                return None;
            }
            Dispatch::IgnoredDirectory => {
                if created {
                    info!("Ignored directory creation: {path}");
                }
                return None;
            }
            Dispatch::IgnoredNonJson => {
                if created {
                    info!("Ignored non-JSON file: {path}");
                }
                return None;
            }
            Dispatch::Missing => {
                warn!("File does not exist: {path}");
                return None;
            }
            Dispatch::Unreadable => {
                warn!("File is not readable: {path}");
                return None;
            }
        }

        Some(self.process_path(event.path).await)
    }

    /// Run the processor for `path` on the blocking pool and log the result.
    pub async fn process_path(&self, path: PathBuf) -> Result<ProcessOutcome> {
        let processor = Arc::clone(&self.processor);
        let file = path.display().to_string();

        let result = tokio::task::spawn_blocking(move || processor.process(&path))
            .await
            .unwrap_or_else(|e| Err(ProcessError::Worker(e.to_string())));

        match &result {
            Ok(outcome) => info!(
                "Finished {file}: letter {}, notification {}",
                outcome.document.display(),
                outcome.notification.log_path.display()
            ),
            Err(e) => error!(stage = e.stage(), "Error processing file {file}: {e}"),
        }

        result
    }

    /// Drain `events` until every sender is gone.
    ///
    /// Events are handled one at a time, so two events for the same file
    /// never run through the processor concurrently.
    pub async fn run(self, mut events: mpsc::Receiver<FileEvent>) -> DispatchStats {
        let mut stats = DispatchStats::default();

        while let Some(event) = events.recv().await {
            stats.received += 1;
            match self.handle(event).await {
                None => stats.ignored += 1,
                Some(Ok(_)) => stats.processed += 1,
                Some(Err(_)) => stats.failed += 1,
            }
        }

        info!(
            "Dispatcher finished: {} events, {} processed, {} failed, {} ignored",
            stats.received, stats.processed, stats.failed, stats.ignored
        );
        stats
    }
}
