//! spicewrap Format - Core primitives for SPICE continuation handling
//!
//! This crate reconstructs and reflows the textual shape of SPICE-style
//! netlist statements with no I/O dependencies. It includes:
//!
//! - Continuation marker vocabulary (`+` and `*+`)
//! - Logical-line assembly (unwrap)
//! - Marker-aware word wrapping (wrap)
//! - Non-blank line filtering
//! - Token and hierarchy lookups
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod assembler;
pub mod constants;
pub mod error;
pub mod lookup;
pub mod marker;
pub mod source;
pub mod wrap;

// Re-export commonly used types
pub use assembler::{AssembleOpts, AssembleStats, Assembler, LogicalLines};
pub use error::{Result, SpiceError};
pub use lookup::{hier_top_down, index_containing_substring, HierPrefixes};
pub use marker::ContinuationMarker;
pub use source::{non_blank, NonBlank};
pub use wrap::{line_width, word_wrap, ReflowWrapper, WrapConfig};

use serde::Deserialize;

/// How comment lines found inside a continuation run are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentPolicy {
    /// A standalone comment always starts a new logical line, even when it
    /// interrupts a continuation run. Statements split around such comments
    /// stay split.
    #[default]
    Split,
    /// Once a continuation line has been seen, standalone comment lines are
    /// held back and emitted after the statement they interrupted.
    Hold,
}

/// What the assembler emits when its input contains no lines at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyInput {
    /// Emit a single empty logical line
    #[default]
    EmitEmptyLine,
    /// Emit nothing
    EmitNothing,
}

impl CommentPolicy {
    /// Whether interleaved comments are held back until the statement completes
    pub fn holds_comments(&self) -> bool {
        matches!(self, CommentPolicy::Hold)
    }
}
