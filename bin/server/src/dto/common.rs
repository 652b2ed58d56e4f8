use serde::{Deserialize, Serialize};

/// Common error body returned by the API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}
