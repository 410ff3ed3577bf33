use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every recoverable failure of a journal operation.
///
/// None of these end an interactive session: callers report the message and
/// carry on with the next command.
#[derive(Debug, Error)]
pub enum JournalError {
    /// The user typed something that is neither a keyword nor a known date layout.
    #[error("'{input}' is not a valid date")]
    InvalidDate { input: String },

    /// `load` was pointed at a path that does not exist.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Any other file-system failure while loading or saving.
    #[error("could not access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl JournalError {
    /// Maps an I/O error on `path`, keeping `NotFound` distinct from the rest.
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => JournalError::NotFound { path },
            _ => JournalError::Io { path, source },
        }
    }
}
