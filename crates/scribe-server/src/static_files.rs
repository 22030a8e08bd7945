//! Static file serving.
//!
//! Thin wrapper: assets under `/static/*` come straight off disk via
//! tower-http, with a nosniff header layered over every response.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, header};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::AppState;

/// Create router for static file serving.
pub(crate) fn static_router(static_dir: &Path) -> Router<Arc<AppState>> {
    Router::new().nest_service("/static", ServeDir::new(static_dir))
}

/// Create layer that adds the X-Content-Type-Options header.
pub(crate) fn content_type_options_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    )
}
