//! Page endpoints: homepage, blog listing, single post.
//!
//! Each handler builds a fresh [`PageView`] from filesystem state and
//! renders it through the shared template set. The fragment flag from the
//! request headers is passed through to the view; it never changes which
//! view is built.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Html;
use scribe_render::PageView;

use crate::error::ServerError;
use crate::handlers::is_fragment_request;
use crate::state::AppState;

/// Handle `GET /`.
pub(crate) async fn home(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Html<String>, ServerError> {
    let view = PageView::home(is_fragment_request(&headers));
    Ok(Html(state.templates.render(&view)?))
}

/// Handle `GET /blog`.
///
/// Loads every post fresh from disk; a single file with bad front matter
/// fails the whole listing (a merely malformed file does not).
pub(crate) async fn blog_list(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Html<String>, ServerError> {
    let posts = state.store.load_all()?;
    let view = PageView::list(posts, is_fragment_request(&headers));
    Ok(Html(state.templates.render(&view)?))
}

/// Handle `GET /content/{slug}`.
pub(crate) async fn blog_content(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Html<String>, ServerError> {
    let post = state.store.load_one(&slug)?;
    let view = PageView::single(post, is_fragment_request(&headers));
    Ok(Html(state.templates.render(&view)?))
}

/// Handle `GET /content` and `GET /content/`: no slug given.
pub(crate) async fn blog_content_missing_slug() -> ServerError {
    ServerError::NotFound
}
