use recruitai_api::ApiError;
use thiserror::Error;

/// Everything that can go wrong between the dashboard and the backend
#[derive(Error, Debug)]
pub enum Error {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed backend response: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound(what) => Error::NotFound(what),
            ApiError::InvalidResponse { .. } | ApiError::ParseError(_) => {
                Error::InvalidResponse(err.to_string())
            }
            ApiError::UnsupportedFile(_) | ApiError::FileTooLarge { .. } => {
                Error::InvalidInput(err.to_string())
            }
            other => Error::ApiError(other.to_string()),
        }
    }
}
