//! `scribe serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use scribe_server::{ServerConfig, run_server};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Host to bind to.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to.
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Directory of markdown posts.
    #[arg(long, default_value = "posts")]
    posts_dir: PathBuf,

    /// Directory of handlebars templates.
    #[arg(long, default_value = "templates")]
    templates_dir: PathBuf,

    /// Directory of static assets.
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        output.success(&format!("Listening on http://{}:{}/", self.host, self.port));

        let config = ServerConfig {
            host: self.host,
            port: self.port,
            posts_dir: self.posts_dir,
            templates_dir: self.templates_dir,
            static_dir: self.static_dir,
        };

        run_server(config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))
    }
}
