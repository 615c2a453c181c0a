//! polylex CLI - entry point.
//!
//! Parses arguments with clap, sets up logging on stderr, and hands the
//! resolved settings to a [`Session`].

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use polylex_drv::{Config, DriverError, FileConfig, Options, OutputFormat, Session};

/// polylex - a lexical scanner for C, Java, Python, Rust and SQL
///
/// Prints one `<KIND,LEXEME,ROW,COL>` line per token, followed by the
/// symbol table.
#[derive(Parser, Debug)]
#[command(name = "polylex")]
#[command(author = "Polylex Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A lexical scanner for C, Java, Python, Rust and SQL", long_about = None)]
struct Cli {
    /// Source file to scan (default: input.<ext> for the language)
    input: Option<PathBuf>,

    /// Source language: c, java, python, rust or sql
    #[arg(short, long, env = "POLYLEX_LANG")]
    lang: Option<String>,

    /// Symbol table layout: simple or scoped
    #[arg(short, long)]
    table: Option<String>,

    /// Symbol table bucket count
    #[arg(long)]
    buckets: Option<usize>,

    /// Symbol table hash: additive or djb2
    #[arg(long)]
    hash: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Do not print the symbol table
    #[arg(long)]
    no_symbols: bool,

    /// Enable verbose output
    #[arg(short, long, env = "POLYLEX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "POLYLEX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "POLYLEX_NO_COLOR")]
    no_color: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            input: self.input.clone(),
            language: self.lang.clone(),
            table: self.table.clone(),
            buckets: self.buckets,
            hash: self.hash.clone(),
            format: self.format,
            no_symbols: self.no_symbols,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let file = load_config(cli.config.as_deref())?;
    let config = Config::resolve(cli.options(), file)?;
    let session = Session::new(config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    session.run(&mut out)?;
    out.flush().context("failed to flush output")?;

    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to stderr so the token stream on stdout stays clean. `RUST_LOG`
/// is honored unless `--verbose` is given.
fn init_logging(verbose: bool, no_color: bool) -> polylex_drv::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or the default search path.
fn load_config(config_path: Option<&Path>) -> polylex_drv::Result<FileConfig> {
    match config_path {
        Some(path) => FileConfig::load_from_path(path),
        None => FileConfig::load(),
    }
}
