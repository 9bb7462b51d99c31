pub mod ping;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for test endpoints (mounted at /api/test)
pub fn router() -> Router<AppState> {
    Router::new().route("/unauthed-ping", get(ping::handler))
}

#[derive(OpenApi)]
#[openapi(paths(ping::handler), components(schemas(ping::PingResponse)))]
pub struct ApiDoc;
