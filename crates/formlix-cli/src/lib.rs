//! formlix CLI - Command-line interface library
//!
//! This library provides the CLI functionality for formlix:
//! - Generate: write a report about a topic using the content backend
//! - From-text: render caller-supplied report text
//! - Outline: print the parsed outline of a text file as JSON
//!
//! # Binary Usage
//!
//! ```bash
//! # Generate a DOCX report about a topic
//! formlix generate --topic "Renewable Energy" --pages 5
//!
//! # Render existing text to PDF
//! formlix from-text --topic "Renewable Energy" --input report.md --format pdf
//!
//! # Inspect how text will be split into sections
//! formlix outline --input report.md --pages 2
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{from_text_command, generate_command, outline_command};
pub use app::{run_cli, OutputFormat};
