//! The [`Document`] content model.

use chrono::{DateTime, Utc};

/// One content item: decoded front matter plus a rendered HTML body.
///
/// Constructed by [`parse`](crate::parse), which leaves `slug` empty; the
/// caller derives it from the source file name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    /// Post title from front matter.
    pub title: String,
    /// Publication date from front matter. Used only for ordering;
    /// posts without a date sort after dated ones.
    pub date: Option<DateTime<Utc>>,
    /// Short summary from front matter.
    pub description: String,
    /// Hero image path or URL from front matter.
    pub image: String,
    /// Public identifier, derived from the file name without extension.
    pub slug: String,
    /// Rendered HTML body. Trusted: injected into pages unescaped.
    pub html: String,
}
