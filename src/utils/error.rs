use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input error: {message}")]
    InputError { message: String },

    #[error("Extraction error: {message}")]
    ExtractionError { message: String },

    #[error("Link processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, LinkerError>;
