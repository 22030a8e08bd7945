//! Handlebars template composition and page rendering.
//!
//! One template set serves every page kind: a `base` layout that splices in
//! the content region selected by the view's `kind` discriminator, plus the
//! header/hero/footer shell partials. [`TEMPLATES`] declares the full set
//! once; handlers never list template files themselves.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use handlebars::Handlebars;
use serde::Serialize;

use crate::view::{PageBody, PageView};

/// Template set: registry name to file name, one entry per region.
///
/// `base` is the layout; `home`, `list` and `post` are the interchangeable
/// content regions; the rest form the full-page shell.
const TEMPLATES: &[(&str, &str)] = &[
    ("base", "base.hbs"),
    ("header", "header.hbs"),
    ("hero", "hero.hbs"),
    ("footer", "footer.hbs"),
    ("home", "home.hbs"),
    ("list", "list.hbs"),
    ("post", "post.hbs"),
];

/// Error returned when page rendering fails.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The template set could not be assembled (missing file, syntax
    /// error). Reported per-request; the serving process stays up.
    #[error("failed to compose template set: {0}")]
    Composition(#[from] Box<handlebars::TemplateError>),
    /// Template execution failed after composition.
    #[error("template execution failed: {0}")]
    Execution(#[from] Box<handlebars::RenderError>),
}

/// Shared page renderer.
///
/// The handlebars registry is composed lazily on first use and then shared
/// read-only across all in-flight requests. A failed composition is
/// returned as an error and retried on the next render, so a fixed
/// template directory recovers without a restart.
pub struct TemplateEngine {
    dir: PathBuf,
    registry: OnceLock<Handlebars<'static>>,
}

impl TemplateEngine {
    /// Create an engine reading templates from `dir`. No files are touched
    /// until the first render.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            registry: OnceLock::new(),
        }
    }

    /// Render a view through the base layout.
    pub fn render(&self, view: &PageView) -> Result<String, RenderError> {
        self.registry()?
            .render("base", &TemplateData::from_view(view))
            .map_err(|e| RenderError::Execution(Box::new(e)))
    }

    fn registry(&self) -> Result<&Handlebars<'static>, RenderError> {
        if let Some(registry) = self.registry.get() {
            return Ok(registry);
        }
        // Composition is pure, so a concurrent double-compile is harmless;
        // get_or_init keeps whichever registry lands first.
        let compiled = compose(&self.dir)?;
        Ok(self.registry.get_or_init(|| compiled))
    }
}

/// Compose the full template set from a directory.
fn compose(dir: &Path) -> Result<Handlebars<'static>, RenderError> {
    let mut registry = Handlebars::new();
    for (name, file) in TEMPLATES {
        registry
            .register_template_file(name, dir.join(file))
            .map_err(|e| RenderError::Composition(Box::new(e)))?;
    }
    Ok(registry)
}

/// Flat view data handed to the template layer.
#[derive(Serialize)]
struct TemplateData<'a> {
    title: &'a str,
    /// Page kind discriminator: `home`, `list` or `single`.
    kind: &'static str,
    is_fragment: bool,
    posts: Vec<PostEntry<'a>>,
    content: &'a str,
}

/// One listing row.
#[derive(Serialize)]
struct PostEntry<'a> {
    title: &'a str,
    slug: &'a str,
    description: &'a str,
    image: &'a str,
    date: String,
}

impl<'a> TemplateData<'a> {
    fn from_view(view: &'a PageView) -> Self {
        let (posts, content) = match &view.body {
            PageBody::Home => (Vec::new(), ""),
            PageBody::List(documents) => (
                documents
                    .iter()
                    .map(|doc| PostEntry {
                        title: &doc.title,
                        slug: &doc.slug,
                        description: &doc.description,
                        image: &doc.image,
                        date: doc
                            .date
                            .map(|d| d.format("%Y-%m-%d").to_string())
                            .unwrap_or_default(),
                    })
                    .collect(),
                "",
            ),
            PageBody::Single(html) => (Vec::new(), html.as_str()),
        };

        Self {
            title: &view.title,
            kind: view.body.kind(),
            is_fragment: view.is_fragment,
            posts,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::{NaiveDate, NaiveTime};
    use scribe_content::Document;

    use super::*;

    fn write_template_set(dir: &Path) {
        let files = [
            (
                "base.hbs",
                concat!(
                    "{{#unless is_fragment}}<html><head><title>{{title}}</title></head>",
                    "<body>{{> header}}{{> hero}}{{/unless}}",
                    "{{#if (eq kind \"home\")}}{{> home}}{{/if}}",
                    "{{#if (eq kind \"list\")}}{{> list}}{{/if}}",
                    "{{#if (eq kind \"single\")}}{{> post}}{{/if}}",
                    "{{#unless is_fragment}}{{> footer}}</body></html>{{/unless}}",
                ),
            ),
            ("header.hbs", "<nav>header</nav>"),
            ("hero.hbs", "<section>hero</section>"),
            ("footer.hbs", "<footer>footer</footer>"),
            ("home.hbs", "<div id=\"home\">welcome</div>"),
            (
                "list.hbs",
                "<ul>{{#each posts}}<li><a href=\"/content/{{slug}}\">{{title}}</a> {{date}}</li>{{/each}}</ul>",
            ),
            ("post.hbs", "<article>{{{content}}}</article>"),
        ];
        for (name, body) in files {
            fs::write(dir.join(name), body).unwrap();
        }
    }

    fn engine() -> (tempfile::TempDir, TemplateEngine) {
        let dir = tempfile::tempdir().unwrap();
        write_template_set(dir.path());
        let engine = TemplateEngine::new(dir.path());
        (dir, engine)
    }

    fn doc(title: &str, slug: &str, date: &str) -> Document {
        Document {
            title: title.to_owned(),
            slug: slug.to_owned(),
            date: Some(
                NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .unwrap()
                    .and_time(NaiveTime::MIN)
                    .and_utc(),
            ),
            ..Document::default()
        }
    }

    #[test]
    fn test_render_home_full_page() {
        let (_dir, engine) = engine();

        let html = engine.render(&PageView::home(false)).unwrap();

        assert!(html.contains("<title>Home Page</title>"));
        assert!(html.contains("<nav>header</nav>"));
        assert!(html.contains("welcome"));
        assert!(html.contains("<footer>footer</footer>"));
    }

    #[test]
    fn test_render_fragment_omits_shell() {
        let (_dir, engine) = engine();

        let html = engine.render(&PageView::home(true)).unwrap();

        assert_eq!(html, "<div id=\"home\">welcome</div>");
    }

    #[test]
    fn test_render_list_region() {
        let (_dir, engine) = engine();
        let docs = vec![doc("Newer", "newer", "2024-06-01"), doc("Older", "older", "2023-01-01")];

        let html = engine.render(&PageView::list(docs, false)).unwrap();

        assert!(html.contains("<title>Blog Posts</title>"));
        let newer = html.find("/content/newer").unwrap();
        let older = html.find("/content/older").unwrap();
        assert!(newer < older);
        assert!(html.contains("2024-06-01"));
    }

    #[test]
    fn test_render_single_injects_html_unescaped() {
        let (_dir, engine) = engine();
        let mut document = doc("Post", "post", "2024-01-01");
        document.html = "<h1>H</h1>".to_owned();

        let html = engine.render(&PageView::single(document, false)).unwrap();

        assert!(html.contains("<article><h1>H</h1></article>"));
    }

    #[test]
    fn test_missing_template_is_composition_error() {
        let dir = tempfile::tempdir().unwrap();
        write_template_set(dir.path());
        fs::remove_file(dir.path().join("hero.hbs")).unwrap();
        let engine = TemplateEngine::new(dir.path());

        let result = engine.render(&PageView::home(false));

        assert!(matches!(result, Err(RenderError::Composition(_))));
    }

    #[test]
    fn test_composition_failure_retries_on_next_render() {
        let dir = tempfile::tempdir().unwrap();
        let engine = TemplateEngine::new(dir.path());

        assert!(engine.render(&PageView::home(false)).is_err());

        // Templates appear after the first failure; no restart needed.
        write_template_set(dir.path());
        assert!(engine.render(&PageView::home(false)).is_ok());
    }

    #[test]
    fn test_unknown_partial_is_execution_error() {
        let dir = tempfile::tempdir().unwrap();
        write_template_set(dir.path());
        fs::write(dir.path().join("base.hbs"), "{{> does_not_exist}}").unwrap();
        let engine = TemplateEngine::new(dir.path());

        let result = engine.render(&PageView::home(false));

        assert!(matches!(result, Err(RenderError::Execution(_))));
    }

    #[test]
    fn test_registry_is_shared_after_first_render() {
        let (dir, engine) = engine();

        engine.render(&PageView::home(false)).unwrap();

        // Deleting the files no longer matters; the composed set is shared.
        drop(fs::remove_file(dir.path().join("base.hbs")));
        assert!(engine.render(&PageView::home(true)).is_ok());
    }
}
