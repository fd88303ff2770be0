//! Startup, idle loop and shutdown.

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};
use visabot_directory_watcher::{DirectoryWatcher, list_entries};

use crate::config::BotConfig;
use crate::dispatcher::{DispatchStats, EventDispatcher};
use crate::processor::FileProcessor;

/// Run the bot until `shutdown` completes.
///
/// Creates the uploads directory if needed, starts the watcher and the
/// dispatcher, processes the startup test submission when present, then
/// logs the directory contents every poll interval. When `shutdown`
/// resolves the watcher is stopped and the dispatcher drains
/// the events already queued before `run` returns.
pub async fn run<F>(config: BotConfig, shutdown: F) -> Result<DispatchStats>
where
    F: Future<Output = ()>,
{
    let watch_config = config.watch_config();
    info!("Monitoring folder: {}", config.uploads_dir.display());
    watch_config.ensure_exists().with_context(|| {
        format!(
            "failed to create uploads directory {}",
            config.uploads_dir.display()
        )
    })?;
    log_contents("Initial files in", &config.uploads_dir);

    let dispatcher = EventDispatcher::new(Arc::new(FileProcessor::new(config.clone())));
    let (mut watcher, events) = DirectoryWatcher::new(watch_config);
    watcher
        .start()
        .context("failed to start directory watcher")?;
    let worker = tokio::spawn(dispatcher.clone().run(events));

    let test_file = config.test_file();
    if test_file.exists() {
        info!("Manually processing file: {}", test_file.display());
        // Failures are already logged by the dispatcher.
        let _ = dispatcher.process_path(test_file).await;
    } else {
        info!("Test file not found: {}", test_file.display());
    }

    tokio::pin!(shutdown);
    let mut ticker = tokio::time::interval(config.poll_interval());
    loop {
        tokio::select! {
            () = &mut shutdown => break,
            _ = ticker.tick() => {
                info!("Waiting for new files...");
                log_contents("Current files in", &config.uploads_dir);
            }
        }
    }

    info!("Stopping watcher...");
    watcher.stop();

    // Stopping the watcher closes the channel; the dispatcher drains what is queued.
    let stats = match worker.await {
        Ok(stats) => stats,
        Err(e) => {
            warn!("Dispatcher task failed: {e}");
            DispatchStats::default()
        }
    };

    Ok(stats)
}

fn log_contents(label: &str, dir: &Path) {
    match list_entries(dir) {
        Ok(names) => info!("{label} {}: {names:?}", dir.display()),
        Err(e) => warn!("Cannot list {}: {e}", dir.display()),
    }
}
