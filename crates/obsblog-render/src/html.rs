//! HTML helpers: escaping and the document shell.

use std::fmt::Write;

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    result
}

/// Wrap a rendered HTML body in a minimal, unstyled HTML5 document.
///
/// The shell carries no stylesheet or script; styling is out of scope.
#[must_use]
pub fn document_shell(title: &str, body: &str) -> String {
    let mut doc = String::with_capacity(body.len() + 256);
    doc.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    doc.push_str("<meta charset=\"UTF-8\">\n");
    doc.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    let title = if title.is_empty() { "Document" } else { title };
    writeln!(doc, "<title>{}</title>", escape_html(title)).unwrap();
    doc.push_str("</head>\n<body>\n");
    doc.push_str(body);
    if !body.ends_with('\n') {
        doc.push('\n');
    }
    doc.push_str("</body>\n</html>\n");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&apos;s");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_document_shell() {
        let doc = document_shell("My Note", "<p>Hi</p>");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>My Note</title>"));
        assert!(doc.contains("<p>Hi</p>"));
        assert!(doc.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_document_shell_escapes_title() {
        let doc = document_shell("a<b>", "");
        assert!(doc.contains("<title>a&lt;b&gt;</title>"));
    }

    #[test]
    fn test_document_shell_default_title() {
        let doc = document_shell("", "<p>x</p>");
        assert!(doc.contains("<title>Document</title>"));
    }
}
