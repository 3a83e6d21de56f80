//! spicewrap I/O - Streaming netlist I/O and high-level APIs
//!
//! This crate provides the file I/O layer and high-level APIs for spicewrap:
//!
//! - Non-blank line sources over any `BufRead`
//! - Streaming logical-line readers and reflowing writers
//! - Request/summary APIs over paths, stdin/stdout and in-memory buffers

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod reader;
pub mod writer;

// Re-export commonly used types
pub use reader::{NonBlankLines, SpiceLineReader};
pub use spicewrap_format::{
    AssembleOpts, AssembleStats, CommentPolicy, EmptyInput, Result, SpiceError, WrapConfig,
};
pub use writer::{SpiceWriter, WriterMetrics};

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, info};

/// High-level unwrap options
#[derive(Debug, Clone, Copy, Default)]
pub struct UnwrapOptions {
    /// Assembly behaviour
    pub assemble: AssembleOpts,
}

/// High-level reflow options
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflowOptions {
    /// Assembly behaviour applied before rewrapping
    pub assemble: AssembleOpts,
    /// Width budget for the rewrapped output
    pub wrap: WrapConfig,
}

/// Where netlist text is read from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// A file on disk
    Path(PathBuf),
    /// Standard input
    Stdin,
    /// In-memory text
    Text(String),
}

/// Where processed text is written to
pub enum OutputSink {
    /// A file on disk, created or truncated
    Path(PathBuf),
    /// Standard output
    Stdout,
    /// Any writer
    Writer(Box<dyn Write + Send>),
}

impl std::fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputSink::Path(path) => f.debug_tuple("Path").field(path).finish(),
            OutputSink::Stdout => f.write_str("Stdout"),
            OutputSink::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

/// Unwrap request
#[derive(Debug)]
pub struct UnwrapRequest {
    /// Input netlist
    pub input: InputSource,
    /// Destination for logical lines
    pub output: OutputSink,
    /// Unwrap options
    pub options: UnwrapOptions,
}

/// Reflow request
#[derive(Debug)]
pub struct ReflowRequest {
    /// Input netlist
    pub input: InputSource,
    /// Destination for rewrapped physical lines
    pub output: OutputSink,
    /// Reflow options
    pub options: ReflowOptions,
}

/// Result of an unwrap run
#[derive(Debug, Clone, Copy)]
pub struct UnwrapSummary {
    /// Raw lines read, blank ones included
    pub lines_read: usize,
    /// Assembly counters
    pub stats: AssembleStats,
    /// Output counters
    pub metrics: WriterMetrics,
    /// Wall-clock duration
    pub elapsed: Duration,
}

/// Result of a reflow run
#[derive(Debug, Clone, Copy)]
pub struct ReflowSummary {
    /// Raw lines read, blank ones included
    pub lines_read: usize,
    /// Assembly counters
    pub stats: AssembleStats,
    /// Output counters
    pub metrics: WriterMetrics,
    /// Width the output was wrapped to
    pub width: usize,
    /// Wall-clock duration
    pub elapsed: Duration,
}

/// Unwrap continuation lines from `input`, writing one logical line per line
pub fn unwrap_stream<R: BufRead, W: Write>(
    input: R,
    output: W,
    opts: UnwrapOptions,
) -> Result<(usize, AssembleStats, WriterMetrics)> {
    let mut reader = SpiceLineReader::new(input, opts.assemble);
    let mut writer = SpiceWriter::passthrough(output);

    for line in reader.by_ref() {
        writer.write_logical(&line?)?;
    }

    let metrics = writer.metrics();
    writer.finish()?;
    Ok((reader.lines_read(), reader.stats(), metrics))
}

/// Unwrap `input` and rewrap every logical line to the configured width
pub fn reflow_stream<R: BufRead, W: Write>(
    input: R,
    output: W,
    opts: ReflowOptions,
) -> Result<(usize, AssembleStats, WriterMetrics)> {
    let mut reader = SpiceLineReader::new(input, opts.assemble);
    let mut writer = SpiceWriter::new(output, opts.wrap);

    for line in reader.by_ref() {
        writer.write_logical(&line?)?;
    }

    let metrics = writer.metrics();
    writer.finish()?;
    Ok((reader.lines_read(), reader.stats(), metrics))
}

/// Unwrap all statements in memory
pub fn unwrap_text(text: &str, opts: UnwrapOptions) -> Vec<String> {
    spicewrap_format::LogicalLines::with_opts(text.lines(), opts.assemble).collect()
}

/// Execute an unwrap request
pub fn execute_unwrap(request: UnwrapRequest) -> Result<UnwrapSummary> {
    let start = Instant::now();
    debug!(input = ?request.input, output = ?request.output, "starting unwrap");

    ensure_distinct(&request.input, &request.output)?;
    let input = open_input(request.input)?;
    let output = open_output(request.output)?;
    let (lines_read, stats, metrics) = unwrap_stream(input, output, request.options)?;

    let summary = UnwrapSummary {
        lines_read,
        stats,
        metrics,
        elapsed: start.elapsed(),
    };
    info!(
        physical = stats.physical_lines,
        continuations = stats.continuation_lines,
        logical = stats.logical_lines,
        held_comments = stats.held_comments,
        "unwrap complete"
    );
    Ok(summary)
}

/// Execute a reflow request
pub fn execute_reflow(request: ReflowRequest) -> Result<ReflowSummary> {
    let start = Instant::now();
    let width = request.options.wrap.width();
    debug!(input = ?request.input, output = ?request.output, width, "starting reflow");

    ensure_distinct(&request.input, &request.output)?;
    let input = open_input(request.input)?;
    let output = open_output(request.output)?;
    let (lines_read, stats, metrics) = reflow_stream(input, output, request.options)?;

    let summary = ReflowSummary {
        lines_read,
        stats,
        metrics,
        width,
        elapsed: start.elapsed(),
    };
    info!(
        logical = stats.logical_lines,
        physical_written = metrics.physical_lines,
        overlong = metrics.overlong_lines,
        "reflow complete"
    );
    Ok(summary)
}

/// Creating the output truncates it, so it must not be the input file.
fn ensure_distinct(input: &InputSource, output: &OutputSink) -> Result<()> {
    if let (InputSource::Path(input), OutputSink::Path(output)) = (input, output) {
        if same_file(input, output)? {
            return Err(SpiceError::OutputIsInput(output.clone()));
        }
    }
    Ok(())
}

fn same_file(input: &Path, output: &Path) -> Result<bool> {
    if !output.exists() {
        return Ok(false);
    }
    Ok(fs::canonicalize(input)? == fs::canonicalize(output)?)
}

fn open_input(source: InputSource) -> Result<Box<dyn BufRead>> {
    Ok(match source {
        InputSource::Path(path) => Box::new(BufReader::new(File::open(path)?)),
        InputSource::Stdin => Box::new(BufReader::new(io::stdin())),
        InputSource::Text(text) => Box::new(Cursor::new(text.into_bytes())),
    })
}

fn open_output(sink: OutputSink) -> Result<Box<dyn Write>> {
    Ok(match sink {
        OutputSink::Path(path) => Box::new(BufWriter::new(File::create(path)?)),
        OutputSink::Stdout => Box::new(BufWriter::new(io::stdout())),
        OutputSink::Writer(writer) => Box::new(writer),
    })
}
