//! Recursive removal of confirmed environments.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use venv_core::Result;
use venv_messages::{msg, MESSAGES};

use crate::console::Console;

/// What happened to one selected path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    Deleted,
    /// Not a real directory (missing, a file, or a symlink).
    Skipped,
    Failed(String),
}

/// Per-run tally of deletion outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletionSummary {
    pub deleted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl DeletionSummary {
    fn record(&mut self, outcome: &DeletionOutcome) {
        match outcome {
            DeletionOutcome::Deleted => self.deleted += 1,
            DeletionOutcome::Skipped => self.skipped += 1,
            DeletionOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Remove one environment directory.
///
/// Symlinks are never followed: a link to a directory is skipped, not the
/// directory it points at.
pub fn delete_virtual_env(path: &Path) -> DeletionOutcome {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_dir() => {}
        Ok(_) => return DeletionOutcome::Skipped,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return DeletionOutcome::Skipped,
        Err(e) => return DeletionOutcome::Failed(e.to_string()),
    }

    match fs::remove_dir_all(path) {
        Ok(()) => DeletionOutcome::Deleted,
        Err(e) => DeletionOutcome::Failed(e.to_string()),
    }
}

/// Delete every path in turn, reporting each outcome to the operator.
///
/// A failure on one path never stops the rest.
pub fn delete_virtual_envs(console: &mut dyn Console, paths: &[PathBuf]) -> Result<DeletionSummary> {
    let mut summary = DeletionSummary::default();

    for path in paths {
        let outcome = delete_virtual_env(path);
        let line = match &outcome {
            DeletionOutcome::Deleted => {
                info!(path = %path.display(), "Deleted virtual environment");
                msg!(MESSAGES.delete_success, path = path.display())
            }
            DeletionOutcome::Skipped => {
                info!(path = %path.display(), "Skipped non-directory");
                msg!(MESSAGES.delete_skipped, path = path.display())
            }
            DeletionOutcome::Failed(error) => {
                warn!(path = %path.display(), error = %error, "Failed to delete virtual environment");
                msg!(MESSAGES.delete_failed, path = path.display(), error = error)
            }
        };
        console.say(&line)?;
        summary.record(&outcome);
    }

    console.say(&msg!(
        MESSAGES.delete_summary,
        deleted = summary.deleted,
        skipped = summary.skipped,
        failed = summary.failed
    ))?;
    Ok(summary)
}
