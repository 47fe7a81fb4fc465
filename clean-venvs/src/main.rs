use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use clean_venvs::cli::Args;
use clean_venvs::console::TerminalConsole;
use venv_core::{venv_error, venv_warning};
use venv_messages::{msg, MESSAGES};

fn main() {
    if let Err(e) = venv_core::tracing_init::init() {
        venv_warning!("{}", msg!(MESSAGES.error_logging_init, error = e));
    }

    let args = Args::parse();

    if let Err(e) = execute(&args) {
        venv_error!("{}", msg!(MESSAGES.error_generic, error = format!("{e:#}")));
        std::process::exit(1);
    }
}

fn execute(args: &Args) -> Result<()> {
    debug!(?args, "Starting clean-venvs");

    let mut console = TerminalConsole::new();
    let outcome = clean_venvs::run(args, &mut console)
        .context("Virtual environment cleanup aborted")?;

    debug!(?outcome, "Finished");
    Ok(())
}
