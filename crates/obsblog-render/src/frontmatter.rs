//! YAML frontmatter removal.

/// Check whether a line is a frontmatter delimiter: three hyphens, with
/// trailing ASCII whitespace tolerated.
fn is_delimiter(line: &str) -> bool {
    line.trim_end() == "---"
}

/// Strip a leading YAML frontmatter block from document text.
///
/// The block must start with a `---` line at the very beginning of the text
/// and end with the next `---` line. Both delimiters and everything between
/// are removed. When no opening delimiter starts the text, or no closing
/// delimiter follows, the input is returned unchanged — frontmatter is
/// optional and malformed blocks are treated as absent.
#[must_use]
pub fn strip_frontmatter(text: &str) -> &str {
    let mut lines = text.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return text;
    };
    if !is_delimiter(first) {
        return text;
    }

    let mut offset = first.len();
    for line in lines {
        offset += line.len();
        if is_delimiter(line) {
            return &text[offset..];
        }
    }

    // Opening delimiter without a closing one: not frontmatter.
    text
}
