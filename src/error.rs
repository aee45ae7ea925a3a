//! Error handling for debber.
//! Defines the error taxonomy and result type used throughout the application.

use std::io;
use thiserror::Error;

use crate::validation::ValidationError;

/// Custom error types for debber operations.
///
/// Every step of the `new` and `create` commands surfaces one of these
/// immediately to its caller; nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// The descriptor file could not be read
    #[error("Failed to read '{path}': {source}.")]
    ReadError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The descriptor is not well-formed TOML or does not match the schema
    #[error("Failed to decode '{path}':\n{message}")]
    DecodeError { path: String, message: String },

    /// The descriptor decoded but breaks a field rule
    #[error("Validation error: {0}.")]
    ValidationError(#[from] ValidationError),

    /// The output directory or the descriptor file to create is already present
    #[error("'{path}' already exists.")]
    AlreadyExists { path: String },

    /// Represents errors that occur while producing output text
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        Error::TemplateError(err.to_string())
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Maps an I/O error onto [`Error::AlreadyExists`] when the target exists,
/// otherwise onto [`Error::IoError`].
pub(crate) fn exists_or_io(err: io::Error, path: &std::path::Path) -> Error {
    if err.kind() == io::ErrorKind::AlreadyExists {
        Error::AlreadyExists { path: path.display().to_string() }
    } else {
        Error::IoError(err)
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
