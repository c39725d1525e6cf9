use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing key in upstream response: {key}")]
    MissingKeyError { key: String },

    #[error("Unexpected value for {field} ({value}): {reason}")]
    InvalidFieldValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Vehicle validation failed: {message}")]
    ValidationError { message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, LookupError>;
