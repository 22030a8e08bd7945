//! HTTP server for the scribe blog.
//!
//! This crate wires the content pipeline to axum:
//! - `GET /` renders the homepage
//! - `GET /blog` loads every post, sorts by date and renders the listing
//! - `GET /content/{slug}` renders one post
//! - `GET /static/*` serves static assets (tower-http `ServeDir`)
//!
//! Requests carrying the `HX-Request: true` header receive only the inner
//! content region instead of the full page shell, so htmx clients can swap
//! page content in place.
//!
//! Every request reads and parses posts from disk; no state is shared
//! across requests beyond the lazily composed, read-only template set.

mod app;
mod error;
mod handlers;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use scribe_content::PostStore;
use scribe_render::TemplateEngine;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory of markdown posts.
    pub posts_dir: PathBuf,
    /// Directory of handlebars templates.
    pub templates_dir: PathBuf,
    /// Directory of static assets.
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            posts_dir: PathBuf::from("posts"),
            templates_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
        }
    }
}

/// Run the server until shutdown.
///
/// # Errors
///
/// Returns an error if the listen address is invalid or binding fails.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        store: PostStore::new(config.posts_dir),
        templates: TemplateEngine::new(config.templates_dir),
    });

    let app = app::create_router(state, &config.static_dir);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}
