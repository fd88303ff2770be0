//! Configuration types for directory watching.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WatcherError};

/// Default capacity of the event channel.
const DEFAULT_CHANNEL_CAPACITY: usize = 1000;

/// Configuration for a watched directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Path to the directory.
    pub path: PathBuf,

    /// Whether subdirectories are watched too.
    pub recursive: bool,

    /// Capacity of the channel events are delivered on.
    pub channel_capacity: usize,
}

impl WatchConfig {
    /// Create a non-recursive config for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            recursive: false,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    /// Watch subdirectories as well.
    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }

    /// Set the event channel capacity.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    /// Create the directory if it does not exist yet.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() && !self.path.is_dir() {
            return Err(WatcherError::NotADirectory(
                self.path.display().to_string(),
            ));
        }
        std::fs::create_dir_all(&self.path)?;
        Ok(())
    }

    /// Check that the configured path is an existing directory.
    pub fn validate(&self) -> Result<()> {
        if !self.path.exists() {
            return Err(WatcherError::DirectoryNotFound(
                self.path.display().to_string(),
            ));
        }
        if !self.path.is_dir() {
            return Err(WatcherError::NotADirectory(
                self.path.display().to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn recursive_mode(&self) -> notify::RecursiveMode {
        if self.recursive {
            notify::RecursiveMode::Recursive
        } else {
            notify::RecursiveMode::NonRecursive
        }
    }
}
