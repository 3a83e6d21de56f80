//! Streaming writer that reflows logical lines

use std::io::Write;

use spicewrap_format::{line_width, ReflowWrapper, Result, WrapConfig};

/// Counters collected while writing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterMetrics {
    /// Logical lines accepted
    pub logical_lines: usize,
    /// Physical lines written
    pub physical_lines: usize,
    /// Physical lines longer than the width because of a single long word
    pub overlong_lines: usize,
    /// Bytes written, newlines included
    pub bytes_written: u64,
}

/// Writer that wraps each logical line before writing it
pub struct SpiceWriter<W: Write> {
    writer: W,
    wrapper: Option<ReflowWrapper>,
    metrics: WriterMetrics,
}

impl<W: Write> SpiceWriter<W> {
    /// Writer that reflows lines to the configured width
    pub fn new(writer: W, config: WrapConfig) -> Self {
        Self {
            writer,
            wrapper: Some(ReflowWrapper::with_config(config)),
            metrics: WriterMetrics::default(),
        }
    }

    /// Writer that emits logical lines unchanged, one per line
    pub fn passthrough(writer: W) -> Self {
        Self {
            writer,
            wrapper: None,
            metrics: WriterMetrics::default(),
        }
    }

    /// Write one logical line
    pub fn write_logical(&mut self, line: &str) -> Result<()> {
        self.metrics.logical_lines += 1;
        match self.wrapper {
            Some(wrapper) => {
                let width = wrapper.config().width();
                for physical in wrapper.wrap_line(line) {
                    if line_width(&physical) > width {
                        self.metrics.overlong_lines += 1;
                    }
                    self.write_physical(&physical)?;
                }
            }
            None => self.write_physical(line)?,
        }
        Ok(())
    }

    /// Counters collected so far
    pub fn metrics(&self) -> WriterMetrics {
        self.metrics
    }

    /// Flush and return the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_physical(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.metrics.physical_lines += 1;
        self.metrics.bytes_written += line.len() as u64 + 1;
        Ok(())
    }
}
