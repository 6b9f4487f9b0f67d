//! Error types for the crate

/// Error types for analysis and fix application
#[derive(Debug, thiserror::Error)]
pub enum AwaitlintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("renaming '{current}' to '{requested}' collides with an existing member")]
    NameCollision { current: String, requested: String },

    #[error("Fix error: {0}")]
    Fix(String),
}

/// Result type alias
pub type AwaitlintResult<T> = Result<T, AwaitlintError>;
