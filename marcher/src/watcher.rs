//! # Scene Hot-Reloading
//!
//! Watches the scene file used by interactive mode. When it is written, the
//! file is parsed again and the resulting scene is published through the
//! [`SceneStore`], so the next frame renders the edited scene without
//! restarting. A file that fails to parse or validate is logged and the
//! previous scene stays live.
//!
//! The watcher monitors the file's parent directory rather than the file
//! itself, because many editors save by writing a new file and renaming it
//! over the old one. Light, camera and render settings are read once at
//! startup; only the primitives are reloaded.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use control::SceneFile;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use render::SceneStore;
use tracing::{error, info};

/// Starts watching `path` and publishes every successful reload to `store`.
///
/// The caller must keep the returned [`RecommendedWatcher`] alive; dropping
/// it stops the watch.
///
/// # Errors
///
/// Returns an error if the path has no file name or the watcher cannot be
/// created or attached to the parent directory.
pub fn start(path: &Path, store: Arc<SceneStore>) -> Result<RecommendedWatcher> {
    let file_name = path
        .file_name()
        .map(OsString::from)
        .ok_or_else(|| anyhow!("scene path {} has no file name", path.display()))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let scene_path = path.to_path_buf();

    let handler = move |result: notify::Result<Event>| match result {
        Ok(event) if is_scene_event(&event, &file_name) => {
            if let Err(e) = reload(&scene_path, &store) {
                error!("Scene reload failed, keeping previous scene: {e:#}");
            }
        }
        Ok(_) => {}
        Err(e) => error!("File watcher error: {e:?}"),
    };
    let mut watcher =
        notify::recommended_watcher(handler).context("failed to create file watcher")?;

    watcher
        .watch(&directory, RecursiveMode::NonRecursive)
        .with_context(|| format!("failed to watch {}", directory.display()))?;

    info!(path = %path.display(), "scene watcher active");
    Ok(watcher)
}

/// Only writes and creations of the watched file trigger a reload.
fn is_scene_event(event: &Event, file_name: &OsString) -> bool {
    (event.kind.is_modify() || event.kind.is_create())
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name.as_os_str()))
}

/// Parses the scene file again and publishes it, returning the new generation.
fn reload(path: &Path, store: &SceneStore) -> Result<u64> {
    let config = SceneFile::load(path)?.build()?;
    Ok(store.replace(config.scene))
}
