use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("invalid key segment: {0}")]
    InvalidKeySegment(String),
    #[error("malformed record at {key}: {reason}")]
    MalformedRecord { key: String, reason: String },
}

impl ModelError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
