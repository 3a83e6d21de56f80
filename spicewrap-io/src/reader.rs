//! Streaming readers for netlist text

use std::io::BufRead;

use spicewrap_format::{AssembleOpts, AssembleStats, Assembler, Result};

/// Line source over a buffered reader.
///
/// Yields each line with surrounding whitespace removed and skips lines that
/// are blank once stripped. Single forward pass over the underlying reader.
pub struct NonBlankLines<R: BufRead> {
    reader: R,
    buf: String,
    lines_read: usize,
}

impl<R: BufRead> NonBlankLines<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            lines_read: 0,
        }
    }

    /// Raw lines read so far, blank ones included
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

impl<R: BufRead> Iterator for NonBlankLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.lines_read += 1;
                    let line = self.buf.trim();
                    if !line.is_empty() {
                        return Some(Ok(line.to_string()));
                    }
                }
                Err(err) => return Some(Err(err.into())),
            }
        }
    }
}

/// Streaming logical-line reader.
///
/// Pulls physical lines from a [`NonBlankLines`] source on demand and yields
/// complete logical lines. I/O errors are yielded once and end iteration.
pub struct SpiceLineReader<R: BufRead> {
    source: NonBlankLines<R>,
    assembler: Assembler,
    failed: bool,
}

impl<R: BufRead> SpiceLineReader<R> {
    /// Create a reader with the given assembly options
    pub fn new(reader: R, opts: AssembleOpts) -> Self {
        Self {
            source: NonBlankLines::new(reader),
            assembler: Assembler::new(opts),
            failed: false,
        }
    }

    /// Assembly counters collected so far
    pub fn stats(&self) -> AssembleStats {
        self.assembler.stats()
    }

    /// Raw lines read so far, blank ones included
    pub fn lines_read(&self) -> usize {
        self.source.lines_read()
    }
}

impl<R: BufRead> Iterator for SpiceLineReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some(line) = self.assembler.pop() {
                return Some(Ok(line));
            }
            if self.assembler.is_finished() {
                return None;
            }
            match self.source.next() {
                Some(Ok(line)) => self.assembler.push(&line),
                Some(Err(err)) => {
                    self.failed = true;
                    return Some(Err(err));
                }
                None => self.assembler.finish(),
            }
        }
    }
}
