//! csvdata - inspect delimiter-separated text files

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use termcolor::ColorChoice;
use tracing::{info, warn};

use csvdata::config::{OutputFormat, ParseOptions};
use csvdata::inspect::inspect;
use csvdata::io::read_text;
use csvdata::output::{describe_delimiter, report_to_stdout};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Inspect delimiter-separated text: detect delimiters and check field counts
#[derive(Parser, Debug)]
#[command(name = "csvdata")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to inspect
    file: PathBuf,

    /// Row delimiter (detected when omitted)
    #[arg(short, long, value_parser = parse_delimiter)]
    row_delimiter: Option<char>,

    /// Column delimiter (detected when omitted)
    #[arg(short, long, value_parser = parse_delimiter)]
    column_delimiter: Option<char>,

    /// Expected number of fields per line (defaults to the header's)
    #[arg(long)]
    columns: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// Parse a delimiter argument: a single character, an escape, or a name
fn parse_delimiter(s: &str) -> Result<char, String> {
    match s {
        "\\n" | "newline" => return Ok('\n'),
        "\\t" | "tab" => return Ok('\t'),
        "\\r" => return Ok('\r'),
        "comma" => return Ok(','),
        "semicolon" => return Ok(';'),
        "pipe" => return Ok('|'),
        _ => {}
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("delimiter must be a single character, got '{}'", s)),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(consistent) => {
            if consistent {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1) // Inconsistent lines found
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();

    let mut options = ParseOptions::new();
    options.row_delimiter = cli.row_delimiter;
    options.column_delimiter = cli.column_delimiter;

    let text = read_text(&cli.file)
        .with_context(|| format!("Failed to read file: {}", cli.file.display()))?;

    let inspection = inspect(&text, &options, cli.columns);
    info!(
        row_delimiter = %describe_delimiter(inspection.row_delimiter),
        column_delimiter = %describe_delimiter(inspection.column_delimiter),
        "resolved delimiters"
    );
    if !inspection.is_consistent() {
        warn!(
            count = inspection.inconsistent_lines.len(),
            "lines with unexpected field count"
        );
    }

    let color_choice = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    report_to_stdout(&inspection, &cli.file, cli.format.into(), color_choice)?;

    Ok(inspection.is_consistent())
}
