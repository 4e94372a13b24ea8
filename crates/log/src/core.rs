//! Error types

/// Result alias for logger setup.
pub type LogResult<T> = Result<T, LogError>;

/// Logger setup failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// The level directive could not be parsed.
    #[error("invalid log filter `{0}`")]
    Filter(String),

    /// A global subscriber is already installed.
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}
