pub mod list;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the expert listing (mounted at /api/experts)
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list::list_experts))
}

#[derive(OpenApi)]
#[openapi(paths(list::list_experts), components(schemas(list::ExpertInfo)))]
pub struct ApiDoc;
