pub mod ask;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the chat endpoint (mounted at /api/chat)
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(ask::ask_expert))
}

#[derive(OpenApi)]
#[openapi(
    paths(ask::ask_expert),
    components(schemas(ask::AskRequest, ask::AskResponse))
)]
pub struct ApiDoc;
