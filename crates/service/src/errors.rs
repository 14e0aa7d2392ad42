use models::errors::ModelError;
use thiserror::Error;

use crate::storage::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    /// Some cuisine index writes failed after others succeeded. Nothing is
    /// rolled back; the index for `restaurant_id` is incomplete.
    #[error("cuisine index for restaurant {restaurant_id} incomplete: {failed} of {attempted} writes failed")]
    PartialIndexFailure { restaurant_id: String, failed: usize, attempted: usize },
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound { entity, id: id.into() }
    }

    /// Stable machine-readable code for responses and logs.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "VALIDATION_ERROR",
            ServiceError::NotFound { entity: "restaurant", .. } => "RESTAURANT_NOT_FOUND",
            ServiceError::NotFound { entity: "review", .. } => "REVIEW_NOT_FOUND",
            ServiceError::NotFound { entity: "details", .. } => "DETAILS_NOT_FOUND",
            ServiceError::NotFound { .. } => "NOT_FOUND",
            ServiceError::Store(_) => "STORE_ERROR",
            ServiceError::PartialIndexFailure { .. } => "PARTIAL_INDEX_FAILURE",
            ServiceError::Corrupt(_) => "CORRUPT_RECORD",
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::InvalidKeySegment(msg) => ServiceError::Validation(msg),
            ModelError::MalformedRecord { .. } => ServiceError::Corrupt(e.to_string()),
        }
    }
}
