use thiserror::Error;

/// Library-wide error type for catalog path operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Output could not be serialized.
    #[error("Failed to serialize {what}: {details}")]
    Serialization { what: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
