use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Menu fetch rejected with status {status}: {body}")]
    RetrievalError { status: u16, body: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Menu data error: {message}")]
    ParseError { message: String },

    #[error("Publish of {text:?} rejected with status {status}: {body}")]
    PublishError {
        status: u16,
        text: String,
        body: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, AlertError>;
