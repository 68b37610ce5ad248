//! API routes for bookd.

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use book_common::{AnswerPayload, AskRequest, HealthResponse};
use tracing::info;

use crate::answers;

// ============================================================================
// Ask Routes
// ============================================================================

pub fn ask_routes() -> Router {
    // Both path forms are in the wild: /api/ask behind the page, /ask on the
    // standalone server. Serve them from the same handler.
    Router::new()
        .route("/api/ask", post(ask).options(preflight))
        .route("/ask", post(ask).options(preflight))
}

/// Answer a question with the placeholder payload.
///
/// The body is not validated: a missing `question` field, or no body at all,
/// is tolerated and answered the same way.
async fn ask(body: Option<Json<AskRequest>>) -> Json<AnswerPayload> {
    let question = body
        .as_ref()
        .and_then(|req| req.question.as_deref())
        .unwrap_or("");
    info!("[Q]  Asked: {}", question);

    Json(answers::placeholder_answer())
}

/// Plain OPTIONS outside a CORS preflight; the CORS layer handles the rest.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().merge(ask_routes()).merge(health_routes())
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body readable")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("body is JSON")
    }

    #[tokio::test]
    async fn test_ask_returns_placeholder_answer() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/ask")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"question":"why is the sky blue?"}"#))
            .expect("request builds");

        let response = app().oneshot(request).await.expect("handler runs");
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["title"], "On the Nature of Understanding");
        assert_eq!(json["explanation"].as_array().map(|a| a.len()), Some(3));
        assert_eq!(
            json["practicalGuidance"].as_array().map(|a| a.len()),
            Some(3)
        );
        assert_eq!(json["notes"].as_array().map(|a| a.len()), Some(2));
    }

    #[tokio::test]
    async fn test_ask_tolerates_empty_and_missing_bodies() {
        for body in [Some("{}"), None] {
            let request = Request::builder()
                .method("POST")
                .uri("/ask")
                .header("content-type", "application/json")
                .body(body.map(Body::from).unwrap_or_else(Body::empty))
                .expect("request builds");

            let response = app().oneshot(request).await.expect("handler runs");
            assert_eq!(response.status(), StatusCode::OK);

            let json = body_json(response).await;
            assert_eq!(json["title"], "On the Nature of Understanding");
        }
    }

    #[tokio::test]
    async fn test_ask_rejects_other_methods() {
        let request = Request::builder()
            .method("GET")
            .uri("/ask")
            .body(Body::empty())
            .expect("request builds");

        let response = app().oneshot(request).await.expect("handler runs");
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_options_is_accepted() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/ask")
            .body(Body::empty())
            .expect("request builds");

        let response = app().oneshot(request).await.expect("handler runs");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_check() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .expect("request builds");

        let response = app().oneshot(request).await.expect("handler runs");
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "living-book-api");
    }
}
