//! spicewrap CLI - Command-line tool for SPICE continuation lines
//!
//! This binary provides command-line interfaces for:
//! - unwrap: join `+` / `*+` continuation lines into one line per statement
//! - reflow: unwrap, then rewrap every statement to a column width
//! - find: report the first token of each statement containing a substring
//! - hier: list the top-down prefixes of a hierarchical instance path

mod config;

use clap::{Parser, Subcommand, ValueEnum};
use config::FileConfig;
use indicatif::{ProgressBar, ProgressStyle};
use spicewrap_format::{hier_top_down, index_containing_substring, CommentPolicy, EmptyInput};
use spicewrap_io::{
    execute_reflow, execute_unwrap, InputSource, OutputSink, ReflowOptions, ReflowRequest,
    ReflowSummary, SpiceLineReader, UnwrapOptions, UnwrapRequest, UnwrapSummary,
};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "spicewrap")]
#[command(about = "Unwrap and reflow SPICE netlist continuation lines")]
#[command(version)]
struct Cli {
    /// TOML configuration file ([unwrap] and [wrap] tables)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Join continuation lines into one logical line per statement
    ///
    /// Examples:
    ///   spicewrap unwrap deck.sp -o deck_flat.sp
    ///   cat deck.sp | spicewrap unwrap - --comment-policy hold
    Unwrap {
        /// Input netlist ("-" for stdin)
        input: PathBuf,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        assemble: AssembleArgs,
        /// Show progress spinner while unwrapping
        #[arg(long)]
        progress: bool,
    },
    /// Unwrap, then rewrap every statement to a maximum width
    ///
    /// Examples:
    ///   spicewrap reflow deck.sp --width 72 -o deck_72.sp
    #[command(alias = "wrap")]
    Reflow {
        /// Input netlist ("-" for stdin)
        input: PathBuf,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Maximum physical line width, continuation prefix included [default: 80]
        #[arg(short, long)]
        width: Option<usize>,
        #[command(flatten)]
        assemble: AssembleArgs,
        /// Show progress spinner while reflowing
        #[arg(long)]
        progress: bool,
    },
    /// Index of the first token containing a substring, per statement (-1 if none)
    ///
    /// Examples:
    ///   spicewrap find deck.sp --substring =
    ///   spicewrap find deck.sp --substring = --format json
    Find {
        /// Input netlist ("-" for stdin)
        input: PathBuf,
        /// Substring to search for in each whitespace-separated token
        #[arg(long, short = 's')]
        substring: String,
        /// Output format (text, json)
        #[arg(long, value_enum, default_value_t = FindFormat::Text)]
        format: FindFormat,
        #[command(flatten)]
        assemble: AssembleArgs,
    },
    /// List every prefix of a slash-delimited hierarchy path, top down
    Hier {
        /// Hierarchical path such as "xtop/xbank0/xcell"
        path: String,
    },
}

#[derive(clap::Args)]
struct AssembleArgs {
    /// Treatment of comment lines inside a continuation run
    #[arg(long, value_enum)]
    comment_policy: Option<CommentPolicyArg>,
    /// Output for an input without statements
    #[arg(long, value_enum)]
    empty_input: Option<EmptyInputArg>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CommentPolicyArg {
    /// Comments always start a new statement
    Split,
    /// Comments interrupting a continuation run are emitted after the statement
    Hold,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum EmptyInputArg {
    EmitEmptyLine,
    EmitNothing,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum FindFormat {
    Text,
    Json,
}

impl From<CommentPolicyArg> for CommentPolicy {
    fn from(arg: CommentPolicyArg) -> Self {
        match arg {
            CommentPolicyArg::Split => CommentPolicy::Split,
            CommentPolicyArg::Hold => CommentPolicy::Hold,
        }
    }
}

impl From<EmptyInputArg> for EmptyInput {
    fn from(arg: EmptyInputArg) -> Self {
        match arg {
            EmptyInputArg::EmitEmptyLine => EmptyInput::EmitEmptyLine,
            EmptyInputArg::EmitNothing => EmptyInput::EmitNothing,
        }
    }
}

impl AssembleArgs {
    fn resolve(&self, config: &FileConfig) -> spicewrap_format::AssembleOpts {
        config.assemble_opts(
            self.comment_policy.map(Into::into),
            self.empty_input.map(Into::into),
        )
    }
}

#[derive(Debug, Clone, serde::Serialize)]
struct FindMatch {
    statement: usize,
    index: i64,
    token: Option<String>,
    line: String,
}

static TRACING_INIT: Once = Once::new();

/// Enable with `RUST_LOG=spicewrap_io=debug`; silent otherwise.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();
    let config = FileConfig::load(cli.config.as_deref())?;
    tracing::debug!(path = ?cli.config, ?config, "configuration loaded");

    match cli.command {
        Commands::Unwrap {
            input,
            output,
            assemble,
            progress,
        } => {
            let options = UnwrapOptions {
                assemble: assemble.resolve(&config),
            };
            handle_unwrap(input, output, options, progress)?;
        }
        Commands::Reflow {
            input,
            output,
            width,
            assemble,
            progress,
        } => {
            let options = ReflowOptions {
                assemble: assemble.resolve(&config),
                wrap: config.wrap_config(width)?,
            };
            handle_reflow(input, output, options, progress)?;
        }
        Commands::Find {
            input,
            substring,
            format,
            assemble,
        } => {
            let opts = assemble.resolve(&config);
            let reader = open_input(&input)?;
            let stdout = io::stdout();
            handle_find(reader, stdout.lock(), &substring, format, opts)?;
        }
        Commands::Hier { path } => {
            let stdout = io::stdout();
            handle_hier(&path, stdout.lock())?;
        }
    }

    Ok(())
}

fn handle_unwrap(
    input: PathBuf,
    output: Option<PathBuf>,
    options: UnwrapOptions,
    show_progress: bool,
) -> Result<(), Box<dyn Error>> {
    let request = UnwrapRequest {
        input: input_source(&input),
        output: output_sink(output.as_deref()),
        options,
    };

    let mut progress_bar = show_progress.then(|| create_spinner("Unwrapping statements"));
    let summary = execute_unwrap(request)?;
    if let Some(pb) = progress_bar.take() {
        pb.finish_with_message(format!(
            "Unwrapped {} physical lines into {} statements in {:.2?}",
            summary.stats.physical_lines, summary.stats.logical_lines, summary.elapsed
        ));
    }
    report_unwrap_summary(&summary, &input)?;
    Ok(())
}

fn handle_reflow(
    input: PathBuf,
    output: Option<PathBuf>,
    options: ReflowOptions,
    show_progress: bool,
) -> Result<(), Box<dyn Error>> {
    let request = ReflowRequest {
        input: input_source(&input),
        output: output_sink(output.as_deref()),
        options,
    };

    let mut progress_bar = show_progress.then(|| create_spinner("Reflowing statements"));
    let summary = execute_reflow(request)?;
    if let Some(pb) = progress_bar.take() {
        pb.finish_with_message(format!(
            "Reflowed {} statements into {} lines in {:.2?}",
            summary.stats.logical_lines, summary.metrics.physical_lines, summary.elapsed
        ));
    }
    report_reflow_summary(&summary, &input)?;
    Ok(())
}

fn handle_find<R: BufRead, W: Write>(
    input: R,
    output: W,
    substring: &str,
    format: FindFormat,
    opts: spicewrap_format::AssembleOpts,
) -> Result<(), Box<dyn Error>> {
    let mut writer = BufWriter::new(output);
    let mut matches = Vec::new();

    for (statement, line) in SpiceLineReader::new(input, opts).enumerate() {
        let line = line?;
        let (index, token) = {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let found = index_containing_substring(&tokens, substring);
            (
                found.map_or(-1, |idx| idx as i64),
                found.map(|idx| tokens[idx].to_string()),
            )
        };
        let entry = FindMatch {
            statement,
            index,
            token,
            line,
        };
        match format {
            FindFormat::Text => writeln!(writer, "{}\t{}", entry.index, entry.line)?,
            FindFormat::Json => matches.push(entry),
        }
    }

    if format == FindFormat::Json {
        serde_json::to_writer_pretty(&mut writer, &matches)?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

fn handle_hier<W: Write>(path: &str, mut output: W) -> Result<(), Box<dyn Error>> {
    for prefix in hier_top_down(path) {
        writeln!(output, "{}", prefix)?;
    }
    output.flush()?;
    Ok(())
}

fn input_source(path: &Path) -> InputSource {
    if path == Path::new("-") {
        InputSource::Stdin
    } else {
        InputSource::Path(path.to_path_buf())
    }
}

fn output_sink(path: Option<&Path>) -> OutputSink {
    match path {
        Some(path) => OutputSink::Path(path.to_path_buf()),
        None => OutputSink::Stdout,
    }
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>, Box<dyn Error>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).map_err(|e| format!("opening {} failed: {e}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

fn report_unwrap_summary(summary: &UnwrapSummary, input: &Path) -> Result<(), Box<dyn Error>> {
    let mut stderr = io::stderr().lock();
    let mut message = format!(
        "Unwrapped {} (physical: {}, continuations: {}, logical: {}, elapsed: {:.2?}",
        input.display(),
        summary.stats.physical_lines,
        summary.stats.continuation_lines,
        summary.stats.logical_lines,
        summary.elapsed
    );
    if summary.stats.held_comments > 0 {
        message.push_str(&format!(", held comments: {}", summary.stats.held_comments));
    }
    message.push(')');
    writeln!(&mut stderr, "{}", message)?;
    Ok(())
}

fn report_reflow_summary(summary: &ReflowSummary, input: &Path) -> Result<(), Box<dyn Error>> {
    let mut stderr = io::stderr().lock();
    let mut message = format!(
        "Reflowed {} (statements: {}, lines written: {}, width: {}, elapsed: {:.2?}",
        input.display(),
        summary.stats.logical_lines,
        summary.metrics.physical_lines,
        summary.width,
        summary.elapsed
    );
    if summary.metrics.overlong_lines > 0 {
        message.push_str(&format!(
            ", lines over width: {}",
            summary.metrics.overlong_lines
        ));
    }
    message.push(')');
    writeln!(&mut stderr, "{}", message)?;
    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
