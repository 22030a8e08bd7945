//! Document parsing and post storage.
//!
//! This crate provides the ingestion half of the blog pipeline:
//! - [`parse`]: split a raw source file into YAML front matter and a
//!   markdown body, and convert the body to an HTML fragment
//! - [`PostStore`]: walk a posts directory and load every document in it
//!
//! # Document format
//!
//! A post is a markdown file with a YAML front matter block delimited by
//! `---` fences:
//!
//! ```text
//! ---
//! title: My Post
//! date: 2024-01-01
//! description: Optional summary
//! image: /static/hero.png
//! ---
//! # Markdown body
//! ```
//!
//! A file whose content does not split into front matter and body is not a
//! post; [`PostStore::load_all`] skips it, while front matter that exists
//! but fails to decode aborts the whole load.

mod document;
mod markdown;
mod parser;
mod store;

pub use document::Document;
pub use parser::{ParseError, parse};
pub use store::{FetchError, PostStore, StoreError};
