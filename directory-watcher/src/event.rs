//! File events from directory watching.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file system event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEvent {
    /// The kind of event.
    pub kind: FileEventKind,

    /// Path to the affected file or directory.
    pub path: PathBuf,

    /// When the event occurred.
    pub timestamp: DateTime<Utc>,

    /// Additional attributes.
    pub attributes: FileAttributes,
}

impl FileEvent {
    /// Create a new file event.
    pub fn new(kind: FileEventKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            timestamp: Utc::now(),
            attributes: FileAttributes::default(),
        }
    }

    /// Build an event from a raw notify event kind, probing the path for attributes.
    pub fn from_notify(kind: notify::EventKind, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut attributes = FileAttributes::from_path(&path);

        // The path may already be gone; trust the backend's folder hint.
        if matches!(
            kind,
            notify::EventKind::Create(notify::event::CreateKind::Folder)
                | notify::EventKind::Remove(notify::event::RemoveKind::Folder)
        ) {
            attributes.is_directory = true;
            attributes.is_file = false;
        }

        Self::new(FileEventKind::from(kind), path).with_attributes(attributes)
    }

    /// Add attributes to the event.
    pub fn with_attributes(mut self, attributes: FileAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Check if this is a file event (not directory).
    pub fn is_file(&self) -> bool {
        self.attributes.is_file
    }

    /// Check if this is a directory event.
    pub fn is_directory(&self) -> bool {
        self.attributes.is_directory
    }

    /// Whether the path ends with the given extension (case-sensitive, without the dot).
    pub fn has_extension(&self, extension: &str) -> bool {
        self.path
            .extension()
            .and_then(std::ffi::OsStr::to_str)
            .is_some_and(|e| e == extension)
    }
}

/// Kind of file event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileEventKind {
    /// File was created.
    Created,

    /// File contents were modified.
    Modified,

    /// File was deleted.
    Deleted,

    /// File was renamed.
    Renamed,

    /// File metadata changed.
    MetadataChanged,

    /// File was accessed or closed.
    Accessed,

    /// Unknown event type.
    Unknown,
}

impl FileEventKind {
    /// Whether the event means new content may be available at the path.
    pub fn is_content_change(self) -> bool {
        matches!(self, Self::Created | Self::Modified)
    }
}

impl std::fmt::Display for FileEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Created => "created",
            Self::Modified => "modified",
            Self::Deleted => "deleted",
            Self::Renamed => "renamed",
            Self::MetadataChanged => "metadata_changed",
            Self::Accessed => "accessed",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

impl From<notify::EventKind> for FileEventKind {
    fn from(kind: notify::EventKind) -> Self {
        match kind {
            notify::EventKind::Create(_) => Self::Created,
            notify::EventKind::Modify(modify_kind) => match modify_kind {
                notify::event::ModifyKind::Name(_) => Self::Renamed,
                notify::event::ModifyKind::Metadata(_) => Self::MetadataChanged,
                _ => Self::Modified,
            },
            notify::EventKind::Remove(_) => Self::Deleted,
            notify::EventKind::Access(_) => Self::Accessed,
            _ => Self::Unknown,
        }
    }
}

/// Additional file attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttributes {
    /// Whether the path is a file.
    pub is_file: bool,

    /// Whether the path is a directory.
    pub is_directory: bool,

    /// File size in bytes (if known).
    pub size: Option<u64>,

    /// File extension (if any).
    pub extension: Option<String>,
}

impl FileAttributes {
    /// Create attributes from a path.
    pub fn from_path(path: &Path) -> Self {
        let metadata = path.metadata().ok();

        Self {
            is_file: metadata.as_ref().is_some_and(std::fs::Metadata::is_file),
            is_directory: metadata.as_ref().is_some_and(std::fs::Metadata::is_dir),
            size: metadata
                .as_ref()
                .filter(|m| m.is_file())
                .map(std::fs::Metadata::len),
            extension: path
                .extension()
                .and_then(std::ffi::OsStr::to_str)
                .map(String::from),
        }
    }
}
