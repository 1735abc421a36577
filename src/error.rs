//! Error types for exdata
//!
//! Tokenizing and parsing never fail: malformed input degrades into fallback
//! tokens or partial trees. Errors only come from the line processor's I/O
//! and output serialization.

use thiserror::Error;

/// exdata errors
#[derive(Error, Debug)]
pub enum Error {
    /// Reading from the line source or writing to the output sink failed
    ///
    /// **Triggered by:** a closed pipe, an unreadable stdin, invalid UTF-8 on input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering the parsed forest as JSON failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// True when the error means the output side went away (e.g. `exdata | head`)
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

/// Result type for exdata operations
pub type Result<T> = std::result::Result<T, Error>;
