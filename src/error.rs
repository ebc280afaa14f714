use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error during I/O operations, including spawning Git
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Error when user input fails.
    #[error("inquire error: {0}")]
    Inquire(#[from] inquire::InquireError),
    /// Error when an invoked Git command exits non-zero
    #[error("git command failed: {0}")]
    GitCommand(String),
    /// Error during input validation.
    #[error("validation error: {0}")]
    Validation(String),
    /// Error during UTF-8 conversion.
    #[error("UTF-8 error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}
