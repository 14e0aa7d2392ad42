use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Successful response body: `{ "success": true, "data": ... }`
#[derive(Serialize, Debug)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self { success: true, data }
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Failed response body: `{ "success": false, "error": { "code", "message" } }`
#[derive(Serialize, Debug)]
pub struct ApiFailure {
    pub success: bool,
    pub error: ErrorBody,
}

impl ApiFailure {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorBody { code: code.into(), message: message.into() },
        }
    }
}
