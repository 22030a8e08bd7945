//! Per-request view models.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use scribe_content::Document;

/// Fixed title for the homepage.
const HOME_TITLE: &str = "Home Page";
/// Fixed title for the listing page.
const LIST_TITLE: &str = "Blog Posts";

/// Content region payload, discriminated by page kind.
///
/// Each variant carries exactly what its template region needs: the list
/// region gets the ordered documents, the single region gets pre-rendered
/// HTML, the home region needs nothing.
#[derive(Debug, PartialEq)]
pub enum PageBody {
    Home,
    List(Vec<Document>),
    Single(String),
}

impl PageBody {
    /// Discriminator string exposed to the template layer.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::List(_) => "list",
            Self::Single(_) => "single",
        }
    }
}

/// Ephemeral view data for one page render.
///
/// Built fresh from filesystem state on every request; nothing survives
/// past the response.
#[derive(Debug, PartialEq)]
pub struct PageView {
    pub title: String,
    pub body: PageBody,
    /// True when the requester wants only the inner content region.
    /// Advisory to the template layer; never changes which view is built.
    pub is_fragment: bool,
}

impl PageView {
    /// Homepage view.
    pub fn home(is_fragment: bool) -> Self {
        Self {
            title: HOME_TITLE.to_owned(),
            body: PageBody::Home,
            is_fragment,
        }
    }

    /// Listing view: documents sorted by date, most recent first.
    ///
    /// The sort is stable, so documents with equal dates keep their
    /// relative scan order. Documents without a date sort last.
    pub fn list(mut documents: Vec<Document>, is_fragment: bool) -> Self {
        documents.sort_by_key(|doc| Reverse(doc.date.unwrap_or(DateTime::<Utc>::MIN_UTC)));
        Self {
            title: LIST_TITLE.to_owned(),
            body: PageBody::List(documents),
            is_fragment,
        }
    }

    /// Single-document view: the document's title and rendered body.
    pub fn single(document: Document, is_fragment: bool) -> Self {
        Self {
            title: document.title,
            body: PageBody::Single(document.html),
            is_fragment,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use pretty_assertions::assert_eq;

    use super::*;

    fn doc(slug: &str, date: Option<&str>) -> Document {
        Document {
            title: slug.to_uppercase(),
            date: date.map(|d| {
                NaiveDate::parse_from_str(d, "%Y-%m-%d")
                    .unwrap()
                    .and_time(NaiveTime::MIN)
                    .and_utc()
            }),
            slug: slug.to_owned(),
            ..Document::default()
        }
    }

    #[test]
    fn test_list_sorts_date_descending_and_stable() {
        // Scan order: the two 2024-06-01 entries arrive as "x" then "y".
        let docs = vec![
            doc("old", Some("2023-01-01")),
            doc("x", Some("2024-06-01")),
            doc("y", Some("2024-06-01")),
            doc("oldest", Some("2020-01-01")),
        ];

        let view = PageView::list(docs, false);
        let PageBody::List(sorted) = view.body else {
            panic!("expected list body");
        };

        let slugs: Vec<_> = sorted.iter().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs, vec!["x", "y", "old", "oldest"]);
    }

    #[test]
    fn test_list_undated_documents_sort_last() {
        let docs = vec![doc("undated", None), doc("dated", Some("2024-01-01"))];

        let view = PageView::list(docs, false);
        let PageBody::List(sorted) = view.body else {
            panic!("expected list body");
        };

        assert_eq!(sorted[0].slug, "dated");
        assert_eq!(sorted[1].slug, "undated");
    }

    #[test]
    fn test_list_constants_and_flag_passthrough() {
        let view = PageView::list(Vec::new(), true);

        assert_eq!(view.title, "Blog Posts");
        assert_eq!(view.body.kind(), "list");
        assert!(view.is_fragment);
    }

    #[test]
    fn test_home_view() {
        let view = PageView::home(false);

        assert_eq!(view.title, "Home Page");
        assert_eq!(view.body, PageBody::Home);
        assert!(!view.is_fragment);
    }

    #[test]
    fn test_single_view_takes_title_and_html() {
        let mut document = doc("post", Some("2024-01-01"));
        document.html = "<p>hi</p>".to_owned();

        let view = PageView::single(document, true);

        assert_eq!(view.title, "POST");
        assert_eq!(view.body, PageBody::Single("<p>hi</p>".to_owned()));
        assert!(view.is_fragment);
    }
}
