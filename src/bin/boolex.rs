//! Command-line interface for boolex
//! Checks boolex programs against the grammar, or lists the tokens they scan to.
//!
//! Usage:
//!   boolex check `<path>` [--format simple|json] [--max-depth N]  - Accept or reject a program
//!   boolex tokens `<path>` [--format simple|json]                 - List the program's tokens
//!
//! `<path>` may be `-` to read from stdin. `check` exits with 0 when the program
//! is accepted, 1 when it is rejected and 2 when it could not be read.

use boolex::boolex::parser::{RecognizerConfig, DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};
use boolex::boolex::processor::{
    check_source, format_report, format_tokens, read_source, OutputFormat, ProcessingError,
};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "boolex")]
#[command(version, about = "A recognizer for boolean-expression programs")]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace); logs go to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Accept or reject a program; prints one diagnostic line on rejection
    Check {
        /// Path to the program, or `-` for stdin
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "simple")]
        format: OutputFormat,

        /// Maximum nesting depth before the run is rejected
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, value_parser = parse_max_depth)]
        max_depth: usize,
    },
    /// List the tokens of a program
    Tokens {
        /// Path to the program, or `-` for stdin
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "simple")]
        format: OutputFormat,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            path,
            format,
            max_depth,
        } => handle_check_command(&path, format, max_depth),
        Commands::Tokens { path, format } => handle_tokens_command(&path, format),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn parse_max_depth(value: &str) -> Result<usize, String> {
    let depth: usize = value.parse().map_err(|e| format!("{}", e))?;
    if depth > MAX_SUPPORTED_DEPTH {
        return Err(format!("must be at most {}", MAX_SUPPORTED_DEPTH));
    }
    Ok(depth)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the check command
fn handle_check_command(
    path: &Path,
    format: OutputFormat,
    max_depth: usize,
) -> Result<ExitCode, ProcessingError> {
    let source = read_source(path)?;
    tracing::info!(path = %path.display(), bytes = source.len(), "checking program");

    let config = RecognizerConfig::new().with_max_depth(max_depth);
    let report = check_source(&source, &config);
    print!("{}", format_report(&report, format)?);

    Ok(if report.is_accepted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Handle the tokens command
fn handle_tokens_command(path: &Path, format: OutputFormat) -> Result<ExitCode, ProcessingError> {
    let source = read_source(path)?;
    tracing::info!(path = %path.display(), bytes = source.len(), "scanning program");

    match format_tokens(&source, format) {
        Ok(listing) => {
            print!("{}", listing);
            Ok(ExitCode::SUCCESS)
        }
        Err(ProcessingError::Rejected(diagnostic)) => {
            println!("{}", diagnostic);
            Ok(ExitCode::from(1))
        }
        Err(e) => Err(e),
    }
}
