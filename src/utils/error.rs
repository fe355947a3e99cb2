use thiserror::Error;

#[derive(Error, Debug)]
pub enum NodeError {
    #[error("Missing required parameter: {name}")]
    MissingParameterError { name: &'static str },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status}")]
    HttpStatusError { status: reqwest::StatusCode },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, NodeError>;
