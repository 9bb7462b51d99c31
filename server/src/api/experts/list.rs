use axum::Json;
use potager_core::Expert;
use serde::Serialize;
use utoipa::ToSchema;

/// A selectable answering role.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExpertInfo {
    pub id: String,
    pub label: String,
    pub description: String,
}

/// List the roles offered in the UI's selector
///
/// The general assistant is not listed; it only answers when a question is
/// rerouted away from a domain expert.
#[utoipa::path(
    get,
    path = "/api/experts",
    tag = "experts",
    responses(
        (status = 200, description = "Selectable roles", body = [ExpertInfo])
    )
)]
pub async fn list_experts() -> Json<Vec<ExpertInfo>> {
    let experts = Expert::selectable()
        .iter()
        .map(|e| ExpertInfo {
            id: e.id().to_string(),
            label: e.label().to_string(),
            description: e.description().to_string(),
        })
        .collect();

    Json(experts)
}

#[cfg(test)]
mod tests {
    use crate::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use potager_core::FakeClient;
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_lists_the_two_domain_experts() {
        let state: AppState = Arc::new(FakeClient::new());
        let app = axum::Router::new()
            .nest("/api/experts", crate::api::experts::router())
            .with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/experts")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        let ids: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["vegetable", "fruit"]);
    }
}
