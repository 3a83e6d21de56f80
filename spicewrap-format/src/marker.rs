//! Continuation markers

use crate::constants::{
    COMMENT_CONTINUATION_PREFIX, COMMENT_INDENT, COMMENT_SENTINEL, CONTINUATION_PREFIX,
    CONTINUATION_STRIP_CHARS, PLAIN_INDENT,
};

/// Marker written in front of every physical line after the first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContinuationMarker {
    /// Continuation of a regular statement (`+`)
    Plain,
    /// Continuation of a comment statement (`*+`)
    Comment,
}

impl ContinuationMarker {
    /// Select the marker for a logical line from its leading character.
    ///
    /// Only the logical line's own first non-whitespace character is
    /// consulted; a line starting with `*` is a comment.
    pub fn for_line(text: &str) -> Self {
        if text.trim_start().starts_with(COMMENT_SENTINEL) {
            ContinuationMarker::Comment
        } else {
            ContinuationMarker::Plain
        }
    }

    /// Indent placed before wrapped content: the marker followed by one space
    pub fn indent(&self) -> &'static str {
        match self {
            ContinuationMarker::Plain => PLAIN_INDENT,
            ContinuationMarker::Comment => COMMENT_INDENT,
        }
    }
}

/// Whether a stripped physical line continues the previous logical line
pub fn is_continuation(line: &str) -> bool {
    line.starts_with(CONTINUATION_PREFIX) || line.starts_with(COMMENT_CONTINUATION_PREFIX)
}

/// Whether a stripped physical line is a comment statement
pub fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_SENTINEL)
}

/// Remove every leading `+`, `*` and space from a continuation line
pub fn strip_continuation(line: &str) -> &str {
    line.trim_start_matches(CONTINUATION_STRIP_CHARS)
}
