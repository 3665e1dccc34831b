//! Obsidian markdown normalization and HTML rendering.
//!
//! The conversion pipeline for a single document:
//!
//! 1. [`strip_frontmatter`] removes a leading YAML metadata block.
//! 2. [`ObsidianPreprocessor`] rewrites Obsidian-specific syntax (wikilinks,
//!    tags, callouts) into plain markdown and HTML fragments that
//!    pulldown-cmark understands.
//! 3. [`render_markdown`] converts the normalized markdown to an HTML body.
//!
//! [`convert_document`] runs all three stages; [`document_shell`] wraps the
//! result in a minimal HTML5 document.
//!
//! # Example
//!
//! ```
//! use obsblog_render::convert_document;
//!
//! let html = convert_document("---\ntitle: X\n---\nHello [[b|World]] #tag");
//! assert_eq!(html.trim(), "<p>Hello World tag</p>");
//! ```

mod fence;
mod frontmatter;
mod html;
mod preprocessor;
mod renderer;

pub use frontmatter::strip_frontmatter;
pub use html::{document_shell, escape_html};
pub use preprocessor::ObsidianPreprocessor;
pub use renderer::{convert_document, render_markdown};
