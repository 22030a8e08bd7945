//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;

use crate::handlers::pages;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/blog", get(pages::blog_list))
        .route("/content", get(pages::blog_content_missing_slug))
        .route("/content/", get(pages::blog_content_missing_slug))
        .route("/content/{slug}", get(pages::blog_content))
        .merge(static_files::static_router(static_dir))
        .layer(ServiceBuilder::new().layer(static_files::content_type_options_layer()))
        .with_state(state)
}
