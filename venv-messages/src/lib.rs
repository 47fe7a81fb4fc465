//! venv-messages
//!
//! Centralized messaging system for the clean-venvs CLI.
//! Provides the message templates and a small builder that fills in
//! `{variable}` placeholders at runtime.

pub mod builder;
pub mod macros;
pub mod messages;

pub use builder::MessageBuilder;
pub use messages::{Messages, MESSAGES};
