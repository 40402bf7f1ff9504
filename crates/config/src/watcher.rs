use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Watch the config file and return a receiver that fires whenever it is
/// written, created or replaced.  Runs on the current Tokio runtime.
///
/// The parent directory is watched rather than the file itself, so the watch
/// survives editors that save by renaming a temp file over the original.  A
/// config file created after startup is picked up only if its directory
/// already existed when the watch began; otherwise live reload stays off until
/// the next launch.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// let mut rx = batmon_config::watch("/home/user/.config/batmon/batmon.toml");
/// while rx.recv().await.is_some() {
///     println!("config changed, reloading");
/// }
/// # }
/// ```
pub fn watch(path: impl AsRef<Path>) -> mpsc::Receiver<()> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(watch_loop(path.as_ref().to_path_buf(), tx));
    rx
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    let Some(dir) = watch_dir(&path) else {
        warn!(
            "Directory of '{}' does not exist; live config reload disabled",
            path.display()
        );
        return;
    };

    let (event_tx, mut event_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = event_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(dir, RecursiveMode::NonRecursive) {
        warn!("Cannot watch '{}' ({e}); live config reload disabled", dir.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = event_rx.recv().await {
        match event {
            Ok(e) if touches_config(&e, &path) => {
                debug!("Config event: {:?}", e.kind);
                // A full channel already has a reload queued.
                if let Err(mpsc::error::TrySendError::Closed(())) = tx.try_send(()) {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}

/// Directory to watch for `path`, if it exists.
fn watch_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|dir| dir.is_dir())
}

/// `true` when `event` modifies, creates or renames-onto the config file.
fn touches_config(event: &Event, path: &Path) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event.paths.iter().any(|p| p.file_name() == path.file_name())
}
