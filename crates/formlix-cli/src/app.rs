//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use formlix_ast::ReportFormat;
use formlix_core::config::CONFIG_FILE_NAME;
use formlix_core::{build_outline, GeneratedReport, ReportGenerator, Settings};

/// Output format for generated reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Word document
    #[default]
    Docx,
    /// PDF document
    Pdf,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Docx => ReportFormat::Docx,
            OutputFormat::Pdf => ReportFormat::Pdf,
        }
    }
}

#[derive(Parser)]
#[command(name = "formlix")]
#[command(author, version, about = "Academic reports from a topic", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a report about a topic using the content backend
    Generate {
        /// Report topic
        #[arg(short, long)]
        topic: String,

        /// Output format (docx or pdf)
        #[arg(short, long, value_enum, default_value = "docx")]
        format: OutputFormat,

        /// Target length in pages (1-20); without it the prompt asks for 15 and nothing is cut
        #[arg(short, long)]
        pages: Option<u32>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory for the written report (overrides the configuration)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Render a report from existing text
    FromText {
        /// Report topic
        #[arg(short, long)]
        topic: String,

        /// Text file with `##` sections
        #[arg(short, long)]
        input: PathBuf,

        /// Output format (docx or pdf)
        #[arg(short, long, value_enum, default_value = "docx")]
        format: OutputFormat,

        /// Target length in pages (1-20); the text is not truncated without it
        #[arg(short, long)]
        pages: Option<u32>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory for the written report (overrides the configuration)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Print the parsed outline of a text file as JSON
    Outline {
        /// Text file with `##` sections
        #[arg(short, long)]
        input: PathBuf,

        /// Apply the page budget before parsing
        #[arg(short, long)]
        pages: Option<u32>,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            topic,
            format,
            pages,
            config,
            output_dir,
        } => {
            let settings = load_settings(config.as_deref(), output_dir)?;
            let report = generate_command(settings, &topic, format, pages)?;
            print_summary(&report);
        }
        Commands::FromText {
            topic,
            input,
            format,
            pages,
            config,
            output_dir,
        } => {
            let settings = load_settings(config.as_deref(), output_dir)?;
            let report = from_text_command(settings, &topic, &input, format, pages)?;
            print_summary(&report);
        }
        Commands::Outline { input, pages } => {
            println!("{}", outline_command(&input, pages)?);
        }
    }

    Ok(())
}

/// Load settings from `config`, or from `formlix.toml` in the working directory
pub fn load_settings(config: Option<&Path>, output_dir: Option<PathBuf>) -> Result<Settings> {
    let path = config.unwrap_or(Path::new(CONFIG_FILE_NAME));
    let mut settings = Settings::load(path)
        .with_context(|| format!("Failed to load configuration: {}", path.display()))?;
    debug!(path = %path.display(), "configuration loaded");

    if let Some(dir) = output_dir {
        settings.output.reports_dir = dir;
    }
    Ok(settings)
}

/// Execute the generate command
pub fn generate_command(
    settings: Settings,
    topic: &str,
    format: OutputFormat,
    pages: Option<u32>,
) -> Result<GeneratedReport> {
    let generator = ReportGenerator::from_settings(settings);
    generator
        .generate_from_topic(topic, format.into(), pages, None)
        .with_context(|| format!("Failed to generate report on: {topic}"))
}

/// Execute the from-text command
pub fn from_text_command(
    settings: Settings,
    topic: &str,
    input: &Path,
    format: OutputFormat,
    pages: Option<u32>,
) -> Result<GeneratedReport> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let generator = ReportGenerator::from_settings(settings);
    generator
        .generate_from_text(topic, &content, format.into(), pages, None)
        .with_context(|| format!("Failed to render report from: {}", input.display()))
}

/// Execute the outline command, returning pretty-printed JSON
pub fn outline_command(input: &Path, pages: Option<u32>) -> Result<String> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let outline = build_outline(&content, pages);
    serde_json::to_string_pretty(&outline).context("Failed to serialize outline")
}

fn print_summary(report: &GeneratedReport) {
    println!("formlix v{}", formlix_core::VERSION);
    println!("Report: {}", report.record.topic);
    println!("  Format: {}", report.record.format);
    if let Some(pages) = report.record.page_limit {
        println!("  Pages: {}", pages);
    }
    println!("  Content: {:?}", report.origin);
    println!("  Output: {}", report.path.display());
}
