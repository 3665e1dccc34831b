//! Markdown to HTML rendering via pulldown-cmark.

use pulldown_cmark::{Options, Parser, html};

use crate::frontmatter::strip_frontmatter;
use crate::preprocessor::ObsidianPreprocessor;

/// Parser options: tables, strikethrough and task lists enabled.
fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Render normalized markdown to an HTML body fragment.
///
/// Fenced code block contents are emitted verbatim (escaped) by the parser;
/// combined with the normalizer's fence exemption, nothing inside fences is
/// ever rewritten.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, parser_options());
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

/// Run the full document pipeline: frontmatter stripping, Obsidian syntax
/// normalization, markdown rendering.
#[must_use]
pub fn convert_document(raw: &str) -> String {
    let stripped = strip_frontmatter(raw);
    let normalized = ObsidianPreprocessor::new().process(stripped);
    render_markdown(&normalized)
}
