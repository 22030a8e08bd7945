//! Application state.
//!
//! Shared state for all request handlers. Both members are read-only per
//! request, so no locking is needed.

use scribe_content::PostStore;
use scribe_render::TemplateEngine;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Post store; re-reads the posts directory on every request.
    pub(crate) store: PostStore,
    /// Shared template set, composed lazily on first render.
    pub(crate) templates: TemplateEngine,
}
