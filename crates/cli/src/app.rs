//! CLI application entry point and configuration.
//!
//! This module provides the main CLI application logic, including argument
//! parsing, configuration loading, and command dispatch.

use crate::commands::{Cli, Commands, ExtractArgs, OutputFormat, ParserChoice};
use crate::error::{CliError, Result};
use clap::Parser;
use cluemine_analysis::classify::AffirmationClassifier;
use cluemine_analysis::parsers::ParserRegistry;
use cluemine_analysis::{detect, preprocess, report, search};
use cluemine_core::{ClueRow, CluemineConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the CLI application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to configuration file, if one was resolved.
    pub config_path: Option<PathBuf>,

    /// Logging verbosity level.
    pub verbosity: u8,

    /// Loaded cluemine configuration.
    pub cluemine: CluemineConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            verbosity: 0,
            cluemine: CluemineConfig::default(),
        }
    }
}

/// Main CLI application.
#[derive(Debug)]
pub struct App {
    /// Application configuration.
    pub config: AppConfig,

    /// Parsed CLI arguments.
    pub cli: Cli,
}

impl App {
    /// Create a new application instance from command line arguments.
    pub fn new() -> Result<Self> {
        let cli = Cli::parse();
        let config = Self::load_config(&cli)?;
        Ok(Self { config, cli })
    }

    /// Load configuration from file and environment.
    fn load_config(cli: &Cli) -> Result<AppConfig> {
        let config_path = cli.config.clone().or_else(CluemineConfig::default_path);

        let cluemine = match &config_path {
            Some(path) if path.exists() => {
                CluemineConfig::load(path).map_err(|e| CliError::Config(e.to_string()))?
            }
            _ => CluemineConfig::default(),
        };

        Ok(AppConfig {
            config_path,
            verbosity: cli.verbose,
            cluemine,
        })
    }

    /// Run the application.
    pub fn run(self) -> Result<()> {
        // Set up logging based on verbosity
        self.setup_logging();

        // Dispatch command
        match &self.cli.command {
            Commands::Extract(args) => self.handle_extract(args),
            Commands::Formats => self.handle_formats(),
        }
    }

    /// Set up logging based on verbosity level.
    fn setup_logging(&self) {
        let level = match self.config.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_module_path(false)
            .format_target(false)
            .format_timestamp(None)
            .try_init()
            .ok(); // Ignore errors if logger already initialized
    }

    fn handle_extract(&self, args: &ExtractArgs) -> Result<()> {
        let search_config = self.resolve_search_config(args)?;

        let registry = ParserRegistry::new();
        let transcript = match args.parser {
            ParserChoice::Auto => registry.detect_and_parse(&args.input),
            choice => registry.parse_with(&choice.to_string(), &args.input),
        }
        .map_err(|e| CliError::Analysis(e.to_string()))?;

        log::info!(
            "Parsed {} messages from {} transcript '{}'",
            transcript.messages.len(),
            transcript.format,
            transcript.chat_name
        );

        let messages = preprocess::preprocess(transcript.messages);
        let marked = detect::mark_messages(messages);
        let clue_count = marked.iter().filter(|m| m.is_clue()).count();
        log::info!("Detected {} clue candidates", clue_count);

        let classifier =
            AffirmationClassifier::with_tokens(self.config.cluemine.affirmation_tokens());
        let marked = search::find_answers(marked, &search_config, &classifier);

        let rows = report::build_rows(&marked);
        if rows.is_empty() {
            log::warn!("No clues found in transcript");
        }

        let output = resolve_output_path(args.output.as_deref(), &args.input, args.format);
        write_rows(&output, args.format, &rows)?;
        println!("Wrote {} clue rows to {}", rows.len(), output.display());

        Ok(())
    }

    fn handle_formats(&self) -> Result<()> {
        for name in ParserRegistry::new().parser_names() {
            println!("{}", name);
        }
        Ok(())
    }

    fn resolve_search_config(&self, args: &ExtractArgs) -> Result<cluemine_core::SearchConfig> {
        let mut search = self.config.cluemine.search.clone();
        if let Some(depth) = args.depth {
            if depth == 0 {
                return Err(CliError::Argument(
                    "--depth must be at least 1".to_string(),
                ));
            }
            search.context_initial_depth = depth;
        }
        if let Some(max_depth) = args.max_depth {
            search.context_max_depth = max_depth;
        }
        if search.context_max_depth < search.context_initial_depth {
            return Err(CliError::Argument(
                "--max-depth must not be below --depth".to_string(),
            ));
        }
        Ok(search)
    }
}

fn resolve_output_path(output: Option<&Path>, input: &Path, format: OutputFormat) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(default_file_name(format)),
        Some(path) => path.to_path_buf(),
        None => input.with_extension(format_extension(format)),
    }
}

fn default_file_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Csv => "cluemine-export.csv",
        OutputFormat::Json => "cluemine-export.json",
        OutputFormat::Jsonl => "cluemine-export.jsonl",
    }
}

fn format_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Csv => "csv",
        OutputFormat::Json => "json",
        OutputFormat::Jsonl => "jsonl",
    }
}

fn write_rows(path: &Path, format: OutputFormat, rows: &[ClueRow]) -> Result<()> {
    use std::io::Write;

    let mut file = fs::File::create(path)?;
    match format {
        OutputFormat::Jsonl => {
            for row in rows {
                let line =
                    serde_json::to_string(row).map_err(|e| CliError::Parse(e.to_string()))?;
                writeln!(file, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            let payload =
                serde_json::to_string_pretty(rows).map_err(|e| CliError::Parse(e.to_string()))?;
            file.write_all(payload.as_bytes())?;
        }
        OutputFormat::Csv => {
            writeln!(
                file,
                "date,author,clue,enumeration,enumeration_total,answer1,answer2,answer3"
            )?;
            for row in rows {
                writeln!(
                    file,
                    "{},{},{},{},{},{},{},{}",
                    csv_escape(&row.date),
                    csv_escape(&row.author),
                    csv_escape(&row.clue),
                    csv_escape(&row.enumeration),
                    row.enumeration_total,
                    csv_escape(&row.answer1),
                    csv_escape(&row.answer2),
                    csv_escape(&row.answer3)
                )?;
            }
        }
    }
    Ok(())
}

fn csv_escape(v: &str) -> String {
    let escaped = v.replace('"', "\"\"");
    format!("\"{}\"", escaped)
}

/// Parse arguments, load configuration, and run the selected command.
pub fn run() -> Result<()> {
    let app = App::new()?;
    app.run()
}
