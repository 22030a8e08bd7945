//! Server error type and HTTP status mapping.
//!
//! Every error is terminal to its request. The client receives a fixed,
//! generic message per error class; diagnostic detail goes to the tracing
//! channel only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use scribe_content::{FetchError, ParseError, StoreError};
use scribe_render::RenderError;

/// Errors a handler can surface, mapped onto HTTP statuses.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Empty slug or no file for the slug.
    #[error("not found")]
    NotFound,
    /// Direct fetch hit an unparsable file.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Directory-wide load failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Template composition or execution failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl From<FetchError> for ServerError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::NotFound => Self::NotFound,
            FetchError::Parse(e) => Self::Parse(e),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound => (StatusCode::NOT_FOUND, "File not found."),
            Self::Parse(ParseError::MalformedDocument) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error processing blog post.")
            }
            Self::Parse(ParseError::InvalidMetadata(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error processing metadata.")
            }
            Self::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Error loading blog posts."),
            Self::Render(RenderError::Composition(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error loading templates.")
            }
            Self::Render(RenderError::Execution(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error rendering page.")
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, message).into_response()
    }
}
