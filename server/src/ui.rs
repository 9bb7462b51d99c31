//! The single-page chat UI.
//!
//! The page is a self-contained static asset embedded at compile time; all
//! interactivity is plain browser JS talking to the JSON API.

use crate::AppState;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Returns the router for the UI (mounted at /)
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
