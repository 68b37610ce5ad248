//! Wire types for the Answer Provider contract.
//!
//! Field names are camelCase on the wire to match the book page the service
//! was originally written for.

use serde::{Deserialize, Serialize};

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "living-book-api";

/// A question submitted to the provider.
///
/// The field is unvalidated and may be absent; the provider answers either
/// way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

/// The multi-section answer returned for every question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerPayload {
    pub title: String,
    pub explanation: Vec<String>,
    pub practical_guidance: Vec<String>,
    pub notes: Vec<String>,
}

/// Health probe payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_payload_uses_camel_case_on_the_wire() {
        let payload = AnswerPayload {
            title: "T".to_string(),
            explanation: vec![],
            practical_guidance: vec!["G".to_string()],
            notes: vec![],
        };

        let json = serde_json::to_value(&payload).expect("serializes");
        assert!(json.get("practicalGuidance").is_some());
        assert!(json.get("practical_guidance").is_none());
    }

    #[test]
    fn test_ask_request_tolerates_missing_question() {
        let req: AskRequest = serde_json::from_str("{}").expect("deserializes");
        assert!(req.question.is_none());
    }

    #[test]
    fn test_health_payload_shape() {
        let json = serde_json::to_value(HealthResponse::ok()).expect("serializes");
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "living-book-api");
    }
}
