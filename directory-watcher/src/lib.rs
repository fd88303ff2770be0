//! # Directory Watcher
//!
//! Monitors a single directory for file changes and forwards them as
//! [`FileEvent`]s over a tokio channel.
//!
//! ## Features
//!
//! - **Real-time Watching**: Created and modified files are reported as they happen
//! - **Non-recursive by Default**: Only direct children of the directory are observed
//! - **Directory Listing**: Snapshot of the current entries for status output
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Directory Watcher                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  WatchConfig ──► DirectoryWatcher ──► mpsc::Receiver<FileEvent> │
//! │                        │                       │                │
//! │                        ▼                       ▼                │
//! │                 notify backend           event consumer         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod listing;
pub mod watcher;

pub use config::WatchConfig;
pub use error::{Result, WatcherError};
pub use event::{FileAttributes, FileEvent, FileEventKind};
pub use listing::list_entries;
pub use watcher::DirectoryWatcher;
