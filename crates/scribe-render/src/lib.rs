//! Page views and template rendering.
//!
//! The presentation half of the blog pipeline:
//! - [`PageView`]: a tagged-union view model built fresh per request,
//!   discriminated by page kind (home, list, single)
//! - [`TemplateEngine`]: a handlebars template set (base layout plus
//!   header/hero/footer shell and one content region per page kind),
//!   composed lazily once per process and shared read-only
//!
//! A view carries an `is_fragment` flag, threaded through to the template
//! layer so the base layout can drop the page shell and emit only the
//! content region for partial-page (htmx) clients.

mod templates;
mod view;

pub use templates::{RenderError, TemplateEngine};
pub use view::{PageBody, PageView};
