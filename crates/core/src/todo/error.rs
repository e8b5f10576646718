use thiserror::Error;

/// Errors produced when validating a create-todo payload.
///
/// The display strings are returned verbatim to API clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("\"Email\" must be a string")]
    EmailNotString,
    #[error("\"Email\" must not be empty")]
    EmptyEmail,
    #[error("\"Title\" must be a string")]
    TitleNotString,
    #[error("\"IsCompleted\" must be a boolean")]
    IsCompletedNotBoolean,
}
