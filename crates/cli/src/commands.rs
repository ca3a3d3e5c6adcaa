//! CLI command definitions for cluemine.
//!
//! Provides the command-line interface for transcript extraction and
//! format inspection.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// Main CLI application.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Logging verbosity
    #[arg(short, long, default_value_t = 0, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, env = "CLUEMINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract clues and candidate answers from a transcript
    Extract(ExtractArgs),

    /// List supported transcript formats
    Formats,
}

/// Extraction arguments.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Transcript file to process
    pub input: PathBuf,

    /// Output file path (a directory gets a default file name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Transcript parser to use
    #[arg(long, value_enum, default_value_t = ParserChoice::Auto)]
    pub parser: ParserChoice,

    /// Initial search window of the context pass
    #[arg(long)]
    pub depth: Option<usize>,

    /// Search window ceiling of the context pass
    #[arg(long)]
    pub max_depth: Option<usize>,
}

/// Output format for extracted clue rows.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma-separated values.
    Csv,

    /// Pretty-printed JSON array.
    Json,

    /// One JSON object per line.
    Jsonl,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

/// Transcript parser selection.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserChoice {
    /// Detect the format from the file name.
    Auto,

    /// WhatsApp text export.
    Whatsapp,

    /// Pre-parsed JSON records.
    Json,
}

impl fmt::Display for ParserChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserChoice::Auto => write!(f, "auto"),
            ParserChoice::Whatsapp => write!(f, "whatsapp"),
            ParserChoice::Json => write!(f, "json"),
        }
    }
}
