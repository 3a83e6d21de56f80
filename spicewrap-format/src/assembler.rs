//! Logical-line assembly (unwrap)
//!
//! A logical line starts at any physical line that is not a continuation and
//! absorbs every `+` / `*+` line that follows it. The assembler keeps exactly
//! one statement in flight; it is emitted when the next statement starts or
//! when the input ends.

use std::collections::VecDeque;

use crate::constants::JOIN_SEPARATOR;
use crate::marker::{is_comment, is_continuation, strip_continuation};
use crate::{CommentPolicy, EmptyInput};

/// Assembly options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssembleOpts {
    /// Treatment of comments interleaved with continuation lines
    pub comment_policy: CommentPolicy,
    /// Output for an input with no lines
    pub empty_input: EmptyInput,
}

/// Counters collected while assembling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssembleStats {
    /// Non-blank physical lines consumed
    pub physical_lines: usize,
    /// Physical lines that were continuations
    pub continuation_lines: usize,
    /// Logical lines emitted
    pub logical_lines: usize,
    /// Comment lines deferred past an interrupted statement
    pub held_comments: usize,
}

/// Push-driven logical-line assembler.
///
/// Feed physical lines with [`Assembler::push`], call [`Assembler::finish`]
/// once the input is exhausted, and drain completed logical lines with
/// [`Assembler::pop`].
#[derive(Debug, Default)]
pub struct Assembler {
    opts: AssembleOpts,
    pending: Option<String>,
    continuing: bool,
    held: Vec<String>,
    ready: VecDeque<String>,
    stats: AssembleStats,
    finished: bool,
}

impl Assembler {
    /// Create an assembler with the given options
    pub fn new(opts: AssembleOpts) -> Self {
        Self {
            opts,
            ..Self::default()
        }
    }

    /// Consume one physical line.
    ///
    /// The line is stripped of surrounding whitespace first; blank lines are
    /// ignored. Lines pushed after [`Assembler::finish`] are ignored.
    pub fn push(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() || self.finished {
            return;
        }
        self.stats.physical_lines += 1;

        if is_continuation(line) {
            self.stats.continuation_lines += 1;
            let pending = self.pending.get_or_insert_with(String::new);
            pending.push(JOIN_SEPARATOR);
            pending.push_str(strip_continuation(line));
            self.continuing = true;
            return;
        }

        if self.continuing && self.opts.comment_policy.holds_comments() && is_comment(line) {
            self.stats.held_comments += 1;
            self.held.push(line.to_string());
            return;
        }

        self.flush_pending();
        self.pending = Some(line.to_string());
        self.continuing = false;
    }

    /// Mark the end of input, releasing the statement still in flight.
    pub fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;

        if self.pending.is_none() && self.opts.empty_input == EmptyInput::EmitEmptyLine {
            self.emit(String::new());
            return;
        }
        self.flush_pending();
    }

    /// Take the next completed logical line, if any
    pub fn pop(&mut self) -> Option<String> {
        self.ready.pop_front()
    }

    /// Whether [`Assembler::finish`] has been called
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Counters collected so far
    pub fn stats(&self) -> AssembleStats {
        self.stats
    }

    fn flush_pending(&mut self) {
        if let Some(line) = self.pending.take() {
            self.emit(line);
        }
        let held = std::mem::take(&mut self.held);
        for comment in held {
            self.emit(comment);
        }
    }

    fn emit(&mut self, line: String) {
        self.stats.logical_lines += 1;
        self.ready.push_back(line);
    }
}

/// Lazy iterator of logical lines over an iterator of physical lines
pub struct LogicalLines<I> {
    inner: I,
    assembler: Assembler,
}

impl<I, S> LogicalLines<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    /// Assemble with default options
    pub fn new<T>(lines: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self::with_opts(lines, AssembleOpts::default())
    }

    /// Assemble with explicit options
    pub fn with_opts<T>(lines: T, opts: AssembleOpts) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            inner: lines.into_iter(),
            assembler: Assembler::new(opts),
        }
    }

    /// Counters collected so far
    pub fn stats(&self) -> AssembleStats {
        self.assembler.stats()
    }
}

impl<I, S> Iterator for LogicalLines<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(line) = self.assembler.pop() {
                return Some(line);
            }
            if self.assembler.is_finished() {
                return None;
            }
            match self.inner.next() {
                Some(line) => self.assembler.push(line.as_ref()),
                None => self.assembler.finish(),
            }
        }
    }
}
