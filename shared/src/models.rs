//! Shared data models.

use serde::{Deserialize, Serialize};

/// Chat request payload.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Chat response payload.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "healthy" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serializes() {
        let json = serde_json::to_string(&HealthResponse::healthy()).unwrap();
        assert_eq!(json, r#"{"status":"healthy"}"#);
    }

    #[test]
    fn test_chat_request_roundtrip() {
        let request: ChatRequest = serde_json::from_str(r#"{"message":"I feel happy"}"#).unwrap();
        assert_eq!(request.message, "I feel happy");
    }
}
