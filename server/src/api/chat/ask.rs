use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use potager_core::{ask, AskError, Expert};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for asking a question.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AskRequest {
    /// Selected answering role.
    #[schema(value_type = String, example = "vegetable")]
    pub expert: Expert,
    /// Free-text question.
    pub question: String,
}

/// A completed answer.
#[derive(Debug, Serialize, ToSchema)]
pub struct AskResponse {
    pub answer: String,
    /// The role the caller selected.
    #[schema(value_type = String, example = "vegetable")]
    pub requested_expert: Expert,
    /// The role whose prompt actually answered.
    #[schema(value_type = String, example = "general")]
    pub answered_by: Expert,
    /// True when the question was rerouted to the general assistant.
    pub downgraded: bool,
}

/// Ask the selected expert a question
///
/// Questions that don't look related to the selected domain are answered by
/// the general assistant; the response records which role answered. Stateless -
/// nothing is persisted.
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "chat",
    request_body = AskRequest,
    responses(
        (status = 200, description = "Answer from the selected (or rerouted) role", body = AskResponse),
        (status = 400, description = "Empty question", body = crate::api::ErrorResponse),
        (status = 503, description = "AI service unavailable", body = crate::api::ErrorResponse)
    )
)]
pub async fn ask_expert(
    State(ai): State<AppState>,
    Json(request): Json<AskRequest>,
) -> impl IntoResponse {
    let answer = match ask(ai.as_ref(), request.expert, &request.question).await {
        Ok(answer) => answer,
        Err(AskError::EmptyQuestion) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Please enter a question".to_string(),
                }),
            )
                .into_response();
        }
        Err(AskError::Ai(e)) => {
            tracing::warn!("AI call failed: {}", e);
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: format!("AI service error: {}", e),
                }),
            )
                .into_response();
        }
    };

    let downgraded = answer.downgraded();
    (
        StatusCode::OK,
        Json(AskResponse {
            answer: answer.content,
            requested_expert: answer.requested,
            answered_by: answer.answered_by,
            downgraded,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use crate::AppState;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use potager_core::FakeClient;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(ai: Arc<FakeClient>) -> axum::Router {
        let state: AppState = ai;
        axum::Router::new()
            .nest("/api/chat", crate::api::chat::router())
            .with_state(state)
    }

    async fn post_chat(
        app: axum::Router,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_related_question_answered_by_selected_expert() {
        let ai = Arc::new(FakeClient::with_response(
            "cabbage",
            "Wrap it and keep it cold.",
        ));
        let (status, json) = post_chat(
            app(ai.clone()),
            serde_json::json!({
                "expert": "vegetable",
                "question": "How should I store cabbage?"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["answer"], "Wrap it and keep it cold.");
        assert_eq!(json["requested_expert"], "vegetable");
        assert_eq!(json["answered_by"], "vegetable");
        assert_eq!(json["downgraded"], false);
        assert_eq!(ai.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_unrelated_question_rerouted_to_general() {
        let ai = Arc::new(FakeClient::new().with_default_response("Use a range-based loop."));
        let (status, json) = post_chat(
            app(ai),
            serde_json::json!({
                "expert": "fruit",
                "question": "How do I write a for loop in Python?"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["requested_expert"], "fruit");
        assert_eq!(json["answered_by"], "general");
        assert_eq!(json["downgraded"], true);
    }

    #[tokio::test]
    async fn test_empty_question_rejected_without_ai_call() {
        let ai = Arc::new(FakeClient::new());
        let (status, json) = post_chat(
            app(ai.clone()),
            serde_json::json!({
                "expert": "vegetable",
                "question": "   "
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Please enter a question");
        assert!(ai.requests().is_empty());
    }

    #[tokio::test]
    async fn test_ai_failure_surfaced_as_error_response() {
        // No responses and no default: the fake client errors on every call
        let ai = Arc::new(FakeClient::new());
        let (status, json) = post_chat(
            app(ai),
            serde_json::json!({
                "expert": "vegetable",
                "question": "Why are my tomato leaves curling?"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(json["error"]
            .as_str()
            .unwrap()
            .starts_with("AI service error"));
    }
}
