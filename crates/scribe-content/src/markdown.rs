//! Markdown to HTML conversion.

use pulldown_cmark::{Options, Parser, html};

/// Parser options: GFM extensions (tables, strikethrough, task lists).
fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Convert a markdown body to an HTML fragment.
///
/// Deterministic for a given input. An empty body renders as an empty
/// string.
pub(crate) fn to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, parser_options());
    let mut output = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut output, parser);
    output
}
