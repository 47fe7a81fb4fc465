//! The interactive select → confirm → delete loop.

use std::path::PathBuf;
use tracing::debug;
use venv_core::Result;
use venv_messages::{msg, MESSAGES};

use crate::console::Console;
use crate::delete::{delete_virtual_envs, DeletionSummary};
use crate::selection::{select, EXIT_WORD};

/// Operator answer at the confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Delete,
    Change,
    Exit,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    NoCandidates,
    Cancelled,
    Deleted(DeletionSummary),
}

enum State {
    Select,
    Confirm(Vec<PathBuf>),
    Delete(Vec<PathBuf>),
    Exit,
}

/// Parse a confirmation answer; `None` for anything unrecognised.
pub fn parse_confirmation(input: &str) -> Option<Confirmation> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("delete") {
        Some(Confirmation::Delete)
    } else if input.eq_ignore_ascii_case("change") {
        Some(Confirmation::Change)
    } else if input.eq_ignore_ascii_case(EXIT_WORD) {
        Some(Confirmation::Exit)
    } else {
        None
    }
}

/// List the selection and prompt until the operator answers
/// delete, change, or exit. End of input counts as exit.
pub fn confirm(console: &mut dyn Console, selected: &[PathBuf]) -> Result<Confirmation> {
    loop {
        console.say(MESSAGES.confirm_header)?;
        for path in selected {
            console.say(&msg!(MESSAGES.confirm_item, path = path.display()))?;
        }

        let Some(answer) = console.ask(MESSAGES.confirm_prompt)? else {
            return Ok(Confirmation::Exit);
        };
        match parse_confirmation(&answer) {
            Some(confirmation) => return Ok(confirmation),
            None => console.say(MESSAGES.confirm_invalid)?,
        }
    }
}

/// Drive the whole interactive phase over a fixed candidate list.
///
/// The list is only read, so `change` always offers the same numbering.
pub fn run_session(console: &mut dyn Console, candidates: &[PathBuf]) -> Result<SessionOutcome> {
    if candidates.is_empty() {
        console.say(MESSAGES.scan_none_found)?;
        return Ok(SessionOutcome::NoCandidates);
    }

    console.say(MESSAGES.scan_found_header)?;

    let mut state = State::Select;
    loop {
        state = match state {
            State::Select => match select(console, candidates)? {
                Some(chosen) => State::Confirm(chosen),
                None => State::Exit,
            },
            State::Confirm(chosen) => match confirm(console, &chosen)? {
                Confirmation::Delete => State::Delete(chosen),
                Confirmation::Change => {
                    debug!("Operator asked to change the selection");
                    State::Select
                }
                Confirmation::Exit => State::Exit,
            },
            State::Delete(chosen) => {
                console.say(MESSAGES.delete_started)?;
                let summary = delete_virtual_envs(console, &chosen)?;
                return Ok(SessionOutcome::Deleted(summary));
            }
            State::Exit => {
                console.say(MESSAGES.confirm_cancelled)?;
                return Ok(SessionOutcome::Cancelled);
            }
        };
    }
}
