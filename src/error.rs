use thiserror::Error;

/// Errors that can occur while producing a chat reply
#[derive(Error, Debug)]
pub enum ChatError {
    /// No generation provider is configured or it could not be created
    #[error("{0}")]
    GenerationUnavailable(String),

    /// The generation provider failed or timed out
    #[error("{0}")]
    GenerationError(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Failed to read a context or history file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
