//! Obsidian syntax normalization.
//!
//! Rewrites Obsidian-specific notation into plain markdown and HTML
//! fragments before the markdown renderer runs:
//!
//! - `[[target]]` / `[[target|label]]` wikilinks become plain text
//! - `#tag` markers lose their hash
//! - `![alt](path)` image spans are removed
//! - `[text](url)` links are flattened to their text
//! - `> [!type] Title` callout runs become `<div class="callout">` blocks
//!
//! Processing is line-based. A fence tracker guards every line, so nothing
//! inside fenced code blocks is rewritten. Inline rewrites run in a fixed
//! order (images, links, wikilinks, tags) before callout assembly sees the
//! line. All rewrites are total: malformed syntax passes through as literal
//! text.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::fence::FenceTracker;
use crate::html::escape_html;

fn image_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"!\[[^\]]*\]\([^)]*\)").unwrap())
}

fn link_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").unwrap())
}

fn wikilink_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Non-greedy: the span ends at the first `]]`.
    RE.get_or_init(|| Regex::new(r"\[\[(.+?)\]\]").unwrap())
}

fn tag_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The regex crate has no lookbehind; the tag-start boundary (line start
    // or a non-word character) is captured and re-emitted instead.
    RE.get_or_init(|| Regex::new(r"(^|[^\w])#([\w-]+)").unwrap())
}

fn callout_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^>\s*\[!(\w+)\]\s*(.*)$").unwrap())
}

/// Apply the inline rewrites to a single line, in the fixed pass order.
fn rewrite_inline(line: &str) -> String {
    let pass = image_pattern().replace_all(line, "");
    let pass = link_pattern().replace_all(&pass, "${1}");
    let pass = wikilink_pattern().replace_all(&pass, |caps: &Captures<'_>| {
        let inner = &caps[1];
        match inner.split_once('|') {
            Some((_, label)) => label.to_owned(),
            None => inner.to_owned(),
        }
    });
    tag_pattern().replace_all(&pass, "${1}${2}").into_owned()
}

/// Title-case a callout type for the default title (`warning` → `Warning`).
fn title_case(kind: &str) -> String {
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// A callout run being collected.
struct Callout {
    kind: String,
    title: String,
    body: Vec<String>,
}

/// Normalizes Obsidian syntax in markdown text.
///
/// # Example
///
/// ```
/// use obsblog_render::ObsidianPreprocessor;
///
/// let out = ObsidianPreprocessor::new().process("See [[note|the note]] #draft");
/// assert_eq!(out, "See the note draft");
/// ```
pub struct ObsidianPreprocessor {
    fence: FenceTracker,
    callout: Option<Callout>,
}

impl ObsidianPreprocessor {
    /// Create a new preprocessor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fence: FenceTracker::new(),
            callout: None,
        }
    }

    /// Normalize a document and return the transformed text.
    ///
    /// Consumes the preprocessor; each document gets a fresh one.
    #[must_use]
    pub fn process(mut self, input: &str) -> String {
        let mut out = Vec::new();
        for line in input.lines() {
            self.process_line(line, &mut out);
        }
        // A callout running to end of input closes there.
        if let Some(callout) = self.callout.take() {
            emit_callout(&callout, &mut out);
        }

        let mut result = out.join("\n");
        if input.ends_with('\n') {
            result.push('\n');
        }
        result
    }

    fn process_line(&mut self, line: &str, out: &mut Vec<String>) {
        let is_marker = self.fence.observe(line);
        if is_marker || self.fence.in_fence() {
            // Fence markers and fence contents pass through untouched. A
            // marker is not a `>` line, so it also ends an open callout.
            if let Some(callout) = self.callout.take() {
                emit_callout(&callout, out);
            }
            out.push(line.to_owned());
            return;
        }

        if let Some(callout) = &mut self.callout {
            if let Some(rest) = strip_quote_prefix(line) {
                callout.body.push(rewrite_inline(rest));
                return;
            }
        }
        // First non-`>` line ends an open run.
        if let Some(callout) = self.callout.take() {
            emit_callout(&callout, out);
        }

        if let Some(caps) = callout_pattern().captures(line) {
            self.callout = Some(Callout {
                kind: caps[1].to_owned(),
                title: caps[2].trim().to_owned(),
                body: Vec::new(),
            });
            return;
        }

        out.push(rewrite_inline(line));
    }
}

impl Default for ObsidianPreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip the blockquote prefix from a callout continuation line: the leading
/// `>` and at most one following space.
fn strip_quote_prefix(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('>')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

/// Replace a collected callout run with its HTML wrapper.
///
/// The body stays markdown; blank lines around it end the surrounding HTML
/// blocks so pulldown-cmark renders the body in the same pass.
fn emit_callout(callout: &Callout, out: &mut Vec<String>) {
    let kind = callout.kind.to_lowercase();
    let title = if callout.title.is_empty() {
        title_case(&callout.kind)
    } else {
        rewrite_inline(&callout.title)
    };

    out.push(format!("<div class=\"callout callout-{kind}\">"));
    out.push(format!(
        "<div class=\"callout-title\">{}</div>",
        escape_html(&title)
    ));
    out.push("<div class=\"callout-body\">".to_owned());
    out.push(String::new());
    out.extend(callout.body.iter().cloned());
    out.push(String::new());
    out.push("</div>".to_owned());
    out.push("</div>".to_owned());
}
