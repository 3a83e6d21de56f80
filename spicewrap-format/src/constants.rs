//! Continuation vocabulary and defaults

/// Prefix marking a continuation of a regular statement
pub const CONTINUATION_PREFIX: &str = "+";

/// Prefix marking a continuation of a comment statement
pub const COMMENT_CONTINUATION_PREFIX: &str = "*+";

/// Indent placed before wrapped content of a regular statement
pub const PLAIN_INDENT: &str = "+ ";

/// Indent placed before wrapped content of a comment statement
pub const COMMENT_INDENT: &str = "*+ ";

/// Leading character of a comment statement
pub const COMMENT_SENTINEL: char = '*';

/// Characters stripped from the front of a continuation line before joining
pub const CONTINUATION_STRIP_CHARS: [char; 3] = ['+', '*', ' '];

/// Separator inserted between a logical line and appended continuation content
pub const JOIN_SEPARATOR: char = ' ';

/// Default physical line width used by the reflow wrapper
pub const DEFAULT_WIDTH: usize = 80;
