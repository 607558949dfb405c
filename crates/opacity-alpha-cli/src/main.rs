//! opacity-alpha command line tool
//!
//! Converts between opacity (0.0-1.0) and alpha (0-255) and generates
//! `.withValues(alpha: N)` replacement snippets.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use opacity_alpha::{RangePolicy, SnippetOptions};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::Outcome;

/// Convert between opacity and alpha values
#[derive(Debug, Parser)]
#[command(name = "opacity-alpha", version, about)]
struct Cli {
    /// How to treat values outside their range
    #[arg(long, value_enum, default_value_t = RangeArg::Reject, global = true)]
    range: RangeArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert an opacity (0.0-1.0) to alpha (0-255)
    ToAlpha {
        #[arg(allow_hyphen_values = true)]
        opacity: String,
    },
    /// Convert an alpha (0-255) to opacity (0.0-1.0)
    ToOpacity {
        #[arg(allow_hyphen_values = true)]
        alpha: String,
    },
    /// Print `.withValues(alpha: N)` for an opacity
    Snippet {
        #[arg(allow_hyphen_values = true)]
        opacity: String,
    },
    /// Replace `.withOpacity(<literal>)` calls in a file (or stdin) and print the result
    Rewrite { path: Option<PathBuf> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RangeArg {
    Allow,
    Clamp,
    Reject,
}

impl From<RangeArg> for RangePolicy {
    fn from(arg: RangeArg) -> Self {
        match arg {
            RangeArg::Allow => RangePolicy::Allow,
            RangeArg::Clamp => RangePolicy::Clamp,
            RangeArg::Reject => RangePolicy::Reject,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Filter from `RUST_LOG`-style directives, falling back to `warn` (or `debug`
/// with `--verbose`) when none are given
fn log_filter(verbose: bool, directives: &str) -> EnvFilter {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(directives)
}

fn init_logging(verbose: bool) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    // stdout carries results, so logs go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(verbose, &directives))
        .init();
}

fn run(cli: &Cli) -> Result<Outcome> {
    let policy = RangePolicy::from(cli.range);
    let options = SnippetOptions::with_range(policy);
    match &cli.command {
        Command::ToAlpha { opacity } => commands::convert::to_alpha(opacity, &options),
        Command::ToOpacity { alpha } => commands::convert::to_opacity(alpha, policy),
        Command::Snippet { opacity } => commands::convert::snippet(opacity, &options),
        Command::Rewrite { path } => {
            let source = commands::rewrite::read_source(path.as_deref())?;
            commands::rewrite::rewrite(&source, &options)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    match run(&cli) {
        Ok(outcome) => {
            match cli.format {
                Format::Text => print!("{}", outcome.text),
                Format::Json => println!("{}", serde_json::to_string_pretty(&outcome.json)?),
            }
            Ok(())
        }
        Err(err) => {
            if cli.format == Format::Json {
                let response = commands::failure_response(&err);
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
            Err(err)
        }
    }
}
