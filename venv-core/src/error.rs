use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VenvError {
    InvalidRoot { path: PathBuf, reason: String },
    Io(#[from] std::io::Error),
    Prompt(String),
    Internal(String),
}

impl VenvError {
    pub fn invalid_root(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        VenvError::InvalidRoot {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl Display for VenvError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            VenvError::InvalidRoot { path, reason } => {
                write!(f, "Cannot scan '{}': {}", path.display(), reason)
            }
            VenvError::Io(e) => write!(f, "I/O error: {}", e),
            VenvError::Prompt(s) => write!(f, "Prompt failed: {}", s),
            VenvError::Internal(s) => write!(f, "Internal error: {}", s),
        }
    }
}

impl From<dialoguer::Error> for VenvError {
    fn from(err: dialoguer::Error) -> Self {
        VenvError::Prompt(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VenvError>;
