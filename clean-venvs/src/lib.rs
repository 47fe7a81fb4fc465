//! Find Python virtual environments under a directory and delete the ones
//! the operator picks.
//!
//! The scan runs to completion on a bounded worker pool before the
//! single-threaded interactive phase starts.

pub mod cli;
pub mod console;
pub mod delete;
pub mod scan;
pub mod selection;
pub mod session;

use tracing::info;
use venv_core::Result;
use venv_messages::{msg, MESSAGES};

use crate::cli::Args;
use crate::console::Console;
use crate::scan::{default_workers, find_virtual_envs};
use crate::session::{run_session, SessionOutcome};

/// Scan `args.path`, then run the interactive session on `console`.
pub fn run(args: &Args, console: &mut dyn Console) -> Result<SessionOutcome> {
    console.say(&msg!(MESSAGES.scan_started, path = args.path.display()))?;

    let candidates = find_virtual_envs(&args.path, default_workers())?;
    info!(
        root = %args.path.display(),
        found = candidates.len(),
        "Scan complete"
    );

    run_session(console, &candidates)
}
