//! Directory watcher implementation.

use std::path::Path;

use notify::{RecommendedWatcher, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::config::WatchConfig;
use crate::error::{Result, WatcherError};
use crate::event::FileEvent;

/// Directory watcher that forwards file system changes onto a channel.
///
/// The notify backend runs on its own thread; every raw event is converted
/// into one [`FileEvent`] per affected path and sent to the receiver
/// returned by [`DirectoryWatcher::new`]. Once [`DirectoryWatcher::stop`]
/// has been called and the backend thread has wound down, the receiver
/// yields `None`.
pub struct DirectoryWatcher {
    /// Watched directory configuration.
    config: WatchConfig,

    /// Internal notify watcher.
    watcher: Option<RecommendedWatcher>,

    /// Event sender, dropped on stop so consumers see the channel close.
    event_tx: Option<mpsc::Sender<FileEvent>>,
}

impl DirectoryWatcher {
    /// Create a new directory watcher and the receiver its events arrive on.
    pub fn new(config: WatchConfig) -> (Self, mpsc::Receiver<FileEvent>) {
        let (event_tx, event_rx) = mpsc::channel(config.channel_capacity);

        let watcher = Self {
            config,
            watcher: None,
            event_tx: Some(event_tx),
        };

        (watcher, event_rx)
    }

    /// Path of the watched directory.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Start watching the configured directory.
    pub fn start(&mut self) -> Result<()> {
        if self.watcher.is_some() {
            return Ok(()); // Already running
        }

        self.config.validate()?;

        let Some(event_tx) = self.event_tx.clone() else {
            return Err(WatcherError::Stopped(self.config.path.display().to_string()));
        };

        let mut watcher = notify::recommended_watcher(
            move |res: std::result::Result<notify::Event, notify::Error>| match res {
                Ok(event) => {
                    for path in event.paths {
                        let file_event = FileEvent::from_notify(event.kind, path);
                        debug!(
                            "Event detected: {} - {}",
                            file_event.kind,
                            file_event.path.display()
                        );

                        if let Err(e) = event_tx.blocking_send(file_event) {
                            error!("Failed to send file event: {e}");
                        }
                    }
                }
                Err(e) => {
                    error!("Watch error: {e}");
                }
            },
        )?;

        watcher.watch(&self.config.path, self.config.recursive_mode())?;
        self.watcher = Some(watcher);

        info!(
            "Started watching {} (recursive: {})",
            self.config.path.display(),
            self.config.recursive
        );

        Ok(())
    }

    /// Stop watching and close the event channel.
    pub fn stop(&mut self) {
        if let Some(mut watcher) = self.watcher.take() {
            if let Err(e) = watcher.unwatch(&self.config.path) {
                warn!("Failed to unwatch {}: {e}", self.config.path.display());
            }
        }

        self.event_tx = None;
        info!("Directory watcher stopped");
    }

    /// Check if the watcher is running.
    pub fn is_running(&self) -> bool {
        self.watcher.is_some()
    }
}

impl Drop for DirectoryWatcher {
    fn drop(&mut self) {
        if self.is_running() {
            self.stop();
        }
    }
}
