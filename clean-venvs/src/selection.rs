//! Numbered candidate list and comma-separated index selection.

use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;
use venv_core::Result;
use venv_messages::{msg, MESSAGES};

use crate::console::Console;

/// Sentinel answer that abandons selection or confirmation.
pub const EXIT_WORD: &str = "exit";

/// Parsed operator answer to the selection prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Exit,
    /// Zero-based positions, duplicates removed, first occurrence kept.
    Indices(Vec<usize>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no indices given")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("index {index} is outside 1..={len}")]
    OutOfRange { index: usize, len: usize },
}

/// Parse a selection answer against a list of `len` candidates.
///
/// Indices are 1-based on input. Any bad token rejects the whole answer.
pub fn parse_selection(input: &str, len: usize) -> std::result::Result<Selection, SelectionError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case(EXIT_WORD) {
        return Ok(Selection::Exit);
    }
    if input.is_empty() {
        return Err(SelectionError::Empty);
    }

    let mut indices = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        let index: usize = token
            .parse()
            .map_err(|_| SelectionError::NotANumber(token.to_string()))?;
        if index == 0 || index > len {
            return Err(SelectionError::OutOfRange { index, len });
        }
        if !indices.contains(&(index - 1)) {
            indices.push(index - 1);
        }
    }
    Ok(Selection::Indices(indices))
}

/// Show the numbered candidates and prompt until the answer is valid.
///
/// Returns `None` when the operator types `exit` or input runs out.
pub fn select(console: &mut dyn Console, candidates: &[PathBuf]) -> Result<Option<Vec<PathBuf>>> {
    loop {
        console.say(MESSAGES.select_header)?;
        for (i, candidate) in candidates.iter().enumerate() {
            console.say(&msg!(
                MESSAGES.select_item,
                index = i + 1,
                path = candidate.display()
            ))?;
        }

        let Some(answer) = console.ask(MESSAGES.select_prompt)? else {
            return Ok(None);
        };

        match parse_selection(&answer, candidates.len()) {
            Ok(Selection::Exit) => return Ok(None),
            Ok(Selection::Indices(indices)) => {
                return Ok(Some(
                    indices.into_iter().map(|i| candidates[i].clone()).collect(),
                ));
            }
            Err(e) => {
                debug!(answer = %answer, error = %e, "Rejected selection");
                console.say(MESSAGES.select_invalid)?;
            }
        }
    }
}
