//! Concurrent directory walk feeding the virtual environment detector.
//!
//! The walk itself is sequential; every directory it yields is handed to a
//! bounded rayon pool for detection and confirmed paths are streamed back
//! over a channel in completion order.

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use tracing::{debug, error, warn};
use venv_core::{Result, VenvError};
use venv_detector::is_virtual_env;
use walkdir::{DirEntry, WalkDir};

/// Upper bound on detection workers, whatever the core count.
pub const MAX_WORKERS: usize = 32;

/// Worker count used when none is given: `min(32, cpus + 4)`.
pub fn default_workers() -> usize {
    (num_cpus::get() + 4).min(MAX_WORKERS)
}

/// Lazy stream of confirmed virtual environment paths.
///
/// Finite and not restartable. Dropping it early stops the producer at its
/// next send.
pub struct Scan {
    receiver: Receiver<PathBuf>,
    producer: Option<JoinHandle<()>>,
}

impl Iterator for Scan {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        match self.receiver.recv() {
            Ok(path) => Some(path),
            Err(_) => {
                if let Some(handle) = self.producer.take() {
                    if handle.join().is_err() {
                        error!("Scan worker panicked; results may be incomplete");
                    }
                }
                None
            }
        }
    }
}

/// Start scanning `root` with at most `workers` detection threads.
///
/// The root itself is never a candidate, only its descendants.
pub fn scan(root: &Path, workers: usize) -> Result<Scan> {
    validate_root(root)?;

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .thread_name(|i| format!("venv-scan-{i}"))
        .build()
        .map_err(|e| VenvError::Internal(format!("Failed to build scan pool: {}", e)))?;

    let (sender, receiver) = mpsc::channel();
    let root = root.to_path_buf();

    let producer = thread::Builder::new()
        .name("venv-walk".to_string())
        .spawn(move || {
            debug!(root = %root.display(), "Walking directory tree");
            let sent = pool.install(|| {
                walk_directories(&root)
                    .par_bridge()
                    .filter(|path| is_virtual_env(path))
                    .try_for_each_with(sender, |sender, path| {
                        debug!(path = %path.display(), "Found virtual environment");
                        sender.send(path)
                    })
            });
            if sent.is_err() {
                debug!("Scan receiver dropped; stopping early");
            }
        })?;

    Ok(Scan {
        receiver,
        producer: Some(producer),
    })
}

/// Scan `root` to completion and collect every confirmed path.
pub fn find_virtual_envs(root: &Path, workers: usize) -> Result<Vec<PathBuf>> {
    Ok(scan(root, workers)?.collect())
}

fn validate_root(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(VenvError::invalid_root(root, "not a directory")),
        Err(e) => Err(VenvError::invalid_root(root, e.to_string())),
    }
}

/// Every directory below `root`, including symlinks to directories.
/// Links are yielded but never descended into; unreadable subtrees are
/// skipped with a warning.
fn walk_directories(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                warn!(path = %path, error = %e, "Skipping unreadable entry");
                None
            }
        })
        .filter(is_directory_entry)
        .map(DirEntry::into_path)
}

fn is_directory_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}
