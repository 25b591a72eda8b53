// error.rs - Fatal error taxonomy for the editor

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure the editor cannot recover from. Unrecognized input is never an error;
/// anything that reaches this type ends the process with a non-zero exit code.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create '{}': {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
