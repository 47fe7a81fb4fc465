//! Operator I/O for the interactive phase.

use dialoguer::{theme::ColorfulTheme, Input};
use is_terminal::IsTerminal;
use std::io::{self, BufRead, Write};
use venv_core::{venv_print, venv_println, Result};

/// Everything the interactive loop needs from the operator.
pub trait Console {
    /// Show one line of output.
    fn say(&mut self, line: &str) -> Result<()>;

    /// Ask for one line of input. `None` means input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Console backed by the process's stdin/stdout.
///
/// Uses `dialoguer` prompts on a terminal and plain line reads when input
/// is piped.
pub struct TerminalConsole {
    interactive: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal() && io::stdout().is_terminal(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn say(&mut self, line: &str) -> Result<()> {
        venv_println!("{}", line);
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        if self.interactive {
            let answer = Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text();
            return end_of_input_as_none(answer);
        }

        venv_print!("{}: ", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

/// Ctrl-D and Ctrl-C at a terminal prompt end the input like a closed pipe.
fn end_of_input_as_none(answer: dialoguer::Result<String>) -> Result<Option<String>> {
    match answer {
        Ok(answer) => Ok(Some(answer)),
        Err(dialoguer::Error::IO(e))
            if matches!(
                e.kind(),
                io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
            ) =>
        {
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Console that replays canned answers and records everything shown.
#[cfg(test)]
pub(crate) struct ScriptedConsole {
    answers: std::collections::VecDeque<String>,
    pub lines: Vec<String>,
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            lines: Vec::new(),
            prompts: Vec::new(),
        }
    }

    pub fn count(&self, line: &str) -> usize {
        self.lines.iter().filter(|l| l.as_str() == line).count()
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}
