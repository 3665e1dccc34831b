//! Fenced code block tracking.
//!
//! The normalizer must leave fence contents untouched, so it feeds every
//! line through this tracker before rewriting anything.

/// Tracks fenced code block state during line-by-line processing.
///
/// CommonMark fences open with three or more backticks or tildes; the
/// closing fence must use the same character, be at least as long, and
/// carry nothing but whitespace after the fence run.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    /// Open fence, if any: the fence character and the opening run length.
    open: Option<(char, usize)>,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether the tracker is currently inside a fenced code block.
    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Advance the tracker by one line.
    ///
    /// Returns `true` when the line itself is a fence marker (opening or
    /// closing), so callers can pass marker lines through verbatim.
    pub(crate) fn observe(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();
        match self.open {
            Some((ch, len)) => {
                if closes_fence(trimmed, ch, len) {
                    self.open = None;
                    return true;
                }
                false
            }
            None => {
                if let Some(opened) = opens_fence(trimmed) {
                    self.open = Some(opened);
                    return true;
                }
                false
            }
        }
    }
}

/// Detect an opening fence, returning its character and run length.
fn opens_fence(trimmed: &str) -> Option<(char, usize)> {
    let ch = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|c| *c == ch).count();
    (len >= 3).then_some((ch, len))
}

/// Check whether a line closes the open fence.
fn closes_fence(trimmed: &str, ch: char, min_len: usize) -> bool {
    let len = trimmed.chars().take_while(|c| *c == ch).count();
    len >= min_len && trimmed[len..].chars().all(char::is_whitespace)
}
