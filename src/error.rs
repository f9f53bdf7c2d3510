//! Error types for the generator.

use thiserror::Error;

/// Every failure is terminal for the run; there is no partial output.
#[derive(Debug, Error)]
pub enum Error {
    /// The command line is unusable (e.g. no input file given).
    #[error("{0}")]
    Config(String),

    /// Input unreadable or output unwritable.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not a usable UCD export.
    #[error("invalid UCD document: {0}")]
    Format(String),
}

pub type Result<T> = std::result::Result<T, Error>;
