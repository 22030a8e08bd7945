//! Filesystem post store.
//!
//! [`PostStore`] walks a posts directory and loads every `.md` file in it.
//! Nothing is cached: each call re-reads and re-parses from disk, so the
//! store itself carries no mutable state and is safe to share across
//! concurrent requests.

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::parser::{ParseError, parse};

/// Error returned when a directory-wide load fails.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A file had a well-formed fence structure but undecodable front
    /// matter. This aborts the whole load rather than skipping the file.
    #[error("invalid front matter in {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    /// Reading a file or walking the directory failed.
    #[error("I/O error loading posts: {0}")]
    Io(#[from] std::io::Error),
}

/// Error returned when fetching a single post by slug.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// No file exists for the slug, or the slug is empty/unsafe.
    #[error("post not found")]
    NotFound,
    /// The file exists but could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Loads documents from a directory of markdown files.
#[derive(Clone, Debug)]
pub struct PostStore {
    root: PathBuf,
}

impl PostStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Load every document under the root directory, recursively.
    ///
    /// Files that do not split into front matter and body are skipped
    /// silently (they are not posts). A file with undecodable front matter
    /// or any I/O failure aborts the whole load: a listing is either built
    /// from every well-fenced file or not at all.
    ///
    /// Returns documents in directory scan order (lexical within each
    /// directory); sorting is the caller's responsibility.
    pub fn load_all(&self) -> Result<Vec<Document>, StoreError> {
        let mut posts = Vec::new();
        self.walk(&self.root, &mut posts)?;
        Ok(posts)
    }

    fn walk(&self, dir: &Path, posts: &mut Vec<Document>) -> Result<(), StoreError> {
        let mut entries: Vec<fs::DirEntry> =
            fs::read_dir(dir)?.collect::<Result<_, std::io::Error>>()?;
        // Lexical order keeps scan order deterministic across platforms.
        entries.sort_by_key(fs::DirEntry::file_name);

        for entry in entries {
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                self.walk(&path, posts)?;
            } else if path.extension().is_some_and(|ext| ext == "md") {
                let raw = fs::read_to_string(&path)?;
                match parse(&raw) {
                    Ok(mut doc) => {
                        doc.slug = slug_for(&path);
                        posts.push(doc);
                    }
                    // Not a valid post format; treat as not-a-document.
                    Err(ParseError::MalformedDocument) => {}
                    Err(ParseError::InvalidMetadata(source)) => {
                        return Err(StoreError::Metadata { path, source });
                    }
                }
            }
        }
        Ok(())
    }

    /// Load a single post by its slug.
    ///
    /// Reads `root/{slug}.md` directly. An empty slug, a slug that would
    /// escape the root, or a missing/unreadable file yield
    /// [`FetchError::NotFound`]; parse failures propagate.
    pub fn load_one(&self, slug: &str) -> Result<Document, FetchError> {
        if slug.is_empty() || slug.contains(['/', '\\']) || slug == ".." {
            return Err(FetchError::NotFound);
        }

        let path = self.root.join(format!("{slug}.md"));
        let raw = fs::read_to_string(&path).map_err(|_| FetchError::NotFound)?;

        let mut doc = parse(&raw)?;
        doc.slug = slug.to_owned();
        Ok(doc)
    }
}

/// Slug for a source file: its file name with the extension stripped.
fn slug_for(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
