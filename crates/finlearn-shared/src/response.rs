//! Standardized API response envelopes.

use serde::{Deserialize, Serialize};

/// Error envelope: `{"error": "<message>"}`. The HTTP status carries the
/// classification; the body carries the human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Success envelope for operations that confirm an action rather than
/// return a record ("Course deleted successfully", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_shape() {
        let json = serde_json::to_value(ErrorResponse::new("Email not found")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Email not found" }));
    }
}
