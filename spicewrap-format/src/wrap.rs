//! Marker-aware reflow (wrap)

use crate::constants::DEFAULT_WIDTH;
use crate::error::{Result, SpiceError};
use crate::marker::ContinuationMarker;
use textwrap::core::display_width;
use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

/// Width budget for reflowing logical lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapConfig {
    width: usize,
}

impl WrapConfig {
    /// Create a configuration, rejecting a zero width
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(SpiceError::InvalidWidth(width));
        }
        Ok(Self { width })
    }

    /// Maximum physical line width in columns, prefix included
    pub fn width(&self) -> usize {
        self.width
    }
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}

/// Greedy word wrap on top of [`textwrap`].
///
/// Whitespace runs collapse to single spaces before wrapping. The first line
/// starts with `initial_indent`, every later line with `subsequent_indent`;
/// indents count toward `width`. Words are never split or hyphenated: a word
/// wider than its line is placed on a line of its own.
pub fn word_wrap(
    text: &str,
    width: usize,
    initial_indent: &str,
    subsequent_indent: &str,
) -> Vec<String> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return Vec::new();
    }

    let options = Options::new(width)
        .initial_indent(initial_indent)
        .subsequent_indent(subsequent_indent)
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit);

    textwrap::wrap(&normalized, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Display width of a physical line, as measured by the wrapper
pub fn line_width(line: &str) -> usize {
    display_width(line)
}

/// Wraps logical lines into physical lines, re-inserting `+ ` or `*+ `
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReflowWrapper {
    config: WrapConfig,
}

impl ReflowWrapper {
    /// Create a wrapper for the given width
    pub fn new(width: usize) -> Result<Self> {
        Ok(Self::with_config(WrapConfig::new(width)?))
    }

    /// Create a wrapper from an existing configuration
    pub fn with_config(config: WrapConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> WrapConfig {
        self.config
    }

    /// Split a logical line into physical lines
    pub fn wrap_line(&self, text: &str) -> Vec<String> {
        let marker = ContinuationMarker::for_line(text);
        word_wrap(text, self.config.width, "", marker.indent())
    }

    /// Split a logical line and join the physical lines with `\n`
    pub fn fill_line(&self, text: &str) -> String {
        self.wrap_line(text).join("\n")
    }
}
