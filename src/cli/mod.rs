//! CLI support for stateql
//!
//! Provides the interactive shell, the one-shot query runner, and the
//! dataset import, for use by the `stateql` binary or for embedding.

mod help;
mod import;
mod oneshot;
mod repl;

pub use help::{
    help_screen, welcome_banner, FAREWELL_MESSAGE, PARSE_ERROR_MESSAGE, STORE_ERROR_MESSAGE,
};
pub use import::{import_dataset, ImportSummary};
pub use oneshot::execute_query;
pub use repl::Repl;

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Grammar rejection
    Parse(crate::ParseError),
    /// Token stream did not reduce to clauses
    Malformed(crate::MalformedQueryError),
    /// Store load or lookup failure
    Store(crate::StoreError),
    /// IO error
    Io(io::Error),
    /// A control word passed to the one-shot runner
    NotAQuery(&'static str),
    /// An import with no store file to merge into
    MissingStoreFile,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Parse(e) => write!(f, "Parse error: {}", e),
            CliError::Malformed(e) => write!(f, "Malformed query: {}", e),
            CliError::Store(e) => write!(f, "Store error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NotAQuery(word) => {
                write!(f, "'{}' is an interactive command, not a query", word)
            }
            CliError::MissingStoreFile => {
                write!(f, "import requires --data <path> naming the store file to merge into")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Parse(e) => Some(e),
            CliError::Malformed(e) => Some(e),
            CliError::Store(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::NotAQuery(_) | CliError::MissingStoreFile => None,
        }
    }
}

impl From<crate::ParseError> for CliError {
    fn from(e: crate::ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<crate::MalformedQueryError> for CliError {
    fn from(e: crate::MalformedQueryError) -> Self {
        CliError::Malformed(e)
    }
}

impl From<crate::StoreError> for CliError {
    fn from(e: crate::StoreError) -> Self {
        CliError::Store(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
